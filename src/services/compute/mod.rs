pub mod virtualmachines;
