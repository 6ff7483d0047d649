pub mod resourcegroups;
