use crate::core::open_enum::open_enum;

open_enum! {
    pub enum ProvisioningState {
        Deleting => "Deleting",
        Failed => "Failed",
        Succeeded => "Succeeded",
        Updating => "Updating",
    }
}

open_enum! {
    pub enum VirtualNetworkEncryptionEnforcement {
        AllowUnencrypted => "AllowUnencrypted",
        DropUnencrypted => "DropUnencrypted",
    }
}
