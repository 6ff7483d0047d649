pub mod subnets;
pub mod virtualnetworks;
