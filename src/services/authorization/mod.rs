pub mod roleassignments;
