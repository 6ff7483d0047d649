use crate::core::open_enum::open_enum;

open_enum! {
    pub enum PrincipalType {
        Device => "Device",
        ForeignGroup => "ForeignGroup",
        Group => "Group",
        ServicePrincipal => "ServicePrincipal",
        User => "User",
    }
}
