use crate::core::commonids::ResourceGroupId;
use crate::core::resourceids::{
    describe_components, impl_resource_id_traits, ParseResult, ResourceId, Segment,
};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualMachineId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub virtual_machine_name: String,
}

impl VirtualMachineId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        virtual_machine_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            virtual_machine_name: virtual_machine_name.into(),
        }
    }

    pub fn resource_group(&self) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), self.resource_group_name.clone())
    }
}

const SEGMENTS: &[Segment] = &[
    Segment::static_segment("staticSubscriptions", "subscriptions"),
    Segment::subscription_id("subscriptionId"),
    Segment::static_segment("staticResourceGroups", "resourceGroups"),
    Segment::resource_group("resourceGroupName"),
    Segment::static_segment("staticProviders", "providers"),
    Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute"),
    Segment::static_segment("staticVirtualMachines", "virtualMachines"),
    Segment::user_specified("virtualMachineName", "virtualMachineValue"),
];

impl ResourceId for VirtualMachineId {
    const ID_TYPE: &'static str = "Virtual Machine";

    fn segments() -> &'static [Segment] {
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self> {
        Ok(Self {
            subscription_id: result.get("subscriptionId")?,
            resource_group_name: result.get("resourceGroupName")?,
            virtual_machine_name: result.get("virtualMachineName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/virtualMachines/{}",
            self.subscription_id, self.resource_group_name, self.virtual_machine_name
        )
    }

    fn describe(&self) -> String {
        describe_components(
            Self::ID_TYPE,
            &[
                ("Subscription", self.subscription_id.as_str()),
                ("Resource Group Name", self.resource_group_name.as_str()),
                ("Virtual Machine Name", self.virtual_machine_name.as_str()),
            ],
        )
    }
}

impl_resource_id_traits!(VirtualMachineId);
