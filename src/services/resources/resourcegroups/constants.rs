use crate::core::open_enum::open_enum;

open_enum! {
    /// Resource types whose members may be force-deleted along with the group.
    pub enum ForceDeletionTypes {
        MicrosoftComputeVirtualMachineScaleSets => "Microsoft.Compute/virtualMachineScaleSets",
        MicrosoftComputeVirtualMachines => "Microsoft.Compute/virtualMachines",
    }
}
