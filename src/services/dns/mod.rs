pub mod recordsets;
