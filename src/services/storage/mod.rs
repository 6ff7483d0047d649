pub mod storageaccounts;
