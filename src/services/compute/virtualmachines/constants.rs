use crate::core::open_enum::open_enum;

open_enum! {
    pub enum CachingTypes {
        None => "None",
        ReadOnly => "ReadOnly",
        ReadWrite => "ReadWrite",
    }
}

open_enum! {
    pub enum DeleteOptions {
        Delete => "Delete",
        Detach => "Detach",
    }
}

open_enum! {
    pub enum DiskCreateOptionTypes {
        Attach => "Attach",
        Empty => "Empty",
        FromImage => "FromImage",
    }
}

open_enum! {
    pub enum DiskDeleteOptionTypes {
        Delete => "Delete",
        Detach => "Detach",
    }
}

open_enum! {
    pub enum InstanceViewTypes {
        InstanceView => "instanceView",
        UserData => "userData",
    }
}

open_enum! {
    pub enum OperatingSystemTypes {
        Linux => "Linux",
        Windows => "Windows",
    }
}

open_enum! {
    pub enum StatusLevelTypes {
        Error => "Error",
        Info => "Info",
        Warning => "Warning",
    }
}

open_enum! {
    pub enum StorageAccountTypes {
        PremiumLrs => "Premium_LRS",
        PremiumZrs => "Premium_ZRS",
        StandardLrs => "Standard_LRS",
        StandardSsdLrs => "StandardSSD_LRS",
        StandardSsdZrs => "StandardSSD_ZRS",
        UltraSsdLrs => "UltraSSD_LRS",
    }
}

open_enum! {
    pub enum VirtualMachineEvictionPolicyTypes {
        Deallocate => "Deallocate",
        Delete => "Delete",
    }
}

open_enum! {
    pub enum VirtualMachinePriorityTypes {
        Low => "Low",
        Regular => "Regular",
        Spot => "Spot",
    }
}

open_enum! {
    /// Commonly used sizes. Any other size the region offers is carried in `Other`.
    pub enum VirtualMachineSizeTypes {
        BasicA0 => "Basic_A0",
        BasicA1 => "Basic_A1",
        BasicA2 => "Basic_A2",
        BasicA3 => "Basic_A3",
        BasicA4 => "Basic_A4",
        StandardA1V2 => "Standard_A1_v2",
        StandardA2V2 => "Standard_A2_v2",
        StandardA4V2 => "Standard_A4_v2",
        StandardA8V2 => "Standard_A8_v2",
        StandardB1ms => "Standard_B1ms",
        StandardB1s => "Standard_B1s",
        StandardB2ms => "Standard_B2ms",
        StandardB2s => "Standard_B2s",
        StandardB4ms => "Standard_B4ms",
        StandardB8ms => "Standard_B8ms",
        StandardD2V3 => "Standard_D2_v3",
        StandardD2sV3 => "Standard_D2s_v3",
        StandardD4V3 => "Standard_D4_v3",
        StandardD4sV3 => "Standard_D4s_v3",
        StandardD8V3 => "Standard_D8_v3",
        StandardD8sV3 => "Standard_D8s_v3",
        StandardD16V3 => "Standard_D16_v3",
        StandardD16sV3 => "Standard_D16s_v3",
        StandardE2sV3 => "Standard_E2s_v3",
        StandardE4sV3 => "Standard_E4s_v3",
        StandardE8sV3 => "Standard_E8s_v3",
        StandardF2sV2 => "Standard_F2s_v2",
        StandardF4sV2 => "Standard_F4s_v2",
        StandardF8sV2 => "Standard_F8s_v2",
    }
}
