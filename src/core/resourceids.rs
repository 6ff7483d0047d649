//! Resource identifiers.
//!
//! A resource ID is a path such as
//! `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`. Each ID
//! type describes its shape as an ordered list of [`Segment`]s; [`Parser`] walks
//! an input path against that list and hands the named values to the concrete
//! type through [`ParseResult`].

use crate::utils::error::{ArmError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// One of a fixed set of values, e.g. a DNS record type.
    Constant,
    ResourceGroup,
    /// A fixed provider namespace such as `Microsoft.Storage`.
    ResourceProvider,
    /// One or more path components, e.g. a subscription or resource group path.
    Scope,
    /// A fixed literal such as `subscriptions`.
    Static,
    SubscriptionId,
    UserSpecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub segment_type: SegmentType,
    pub fixed_value: Option<&'static str>,
    pub possible_values: &'static [&'static str],
    pub example_value: &'static str,
}

impl Segment {
    pub const fn static_segment(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::Static,
            fixed_value: Some(value),
            possible_values: &[],
            example_value: value,
        }
    }

    pub const fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceProvider,
            fixed_value: Some(value),
            possible_values: &[],
            example_value: value,
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::SubscriptionId,
            fixed_value: None,
            possible_values: &[],
            example_value: "12345678-1234-9876-4563-123456789012",
        }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::ResourceGroup,
            fixed_value: None,
            possible_values: &[],
            example_value: "example-resource-group",
        }
    }

    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::UserSpecified,
            fixed_value: None,
            possible_values: &[],
            example_value,
        }
    }

    pub const fn constant(
        name: &'static str,
        possible_values: &'static [&'static str],
        example_value: &'static str,
    ) -> Self {
        Self {
            name,
            segment_type: SegmentType::Constant,
            fixed_value: None,
            possible_values,
            example_value,
        }
    }

    pub const fn scope(name: &'static str) -> Self {
        Self {
            name,
            segment_type: SegmentType::Scope,
            fixed_value: None,
            possible_values: &[],
            example_value: "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/some-resource-group",
        }
    }
}

/// Values extracted from an input path, keyed by segment name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub id_type: &'static str,
    pub parsed: HashMap<String, String>,
    pub raw_input: String,
}

impl ParseResult {
    pub fn get(&self, segment: &str) -> Result<String> {
        match self.parsed.get(segment) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(ArmError::SegmentNotSpecified {
                id_type: self.id_type.to_string(),
                segment: segment.to_string(),
                input: self.raw_input.clone(),
            }),
        }
    }
}

pub struct Parser {
    id_type: &'static str,
    segments: &'static [Segment],
}

impl Parser {
    pub fn new(id_type: &'static str, segments: &'static [Segment]) -> Self {
        Self { id_type, segments }
    }

    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(self.invalid(input, "the ID was empty"));
        }

        let path = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let path = path.strip_suffix('/').unwrap_or(path);
        let components: Vec<&str> = path.split('/').collect();

        let mut parsed = HashMap::new();
        let mut position = 0;

        for (index, segment) in self.segments.iter().enumerate() {
            if segment.segment_type == SegmentType::Scope {
                let remaining_segments = self.segments.len() - index - 1;
                let available = components.len().saturating_sub(position);
                if available <= remaining_segments {
                    return Err(self.not_specified(segment, input));
                }
                let end = components.len() - remaining_segments;
                let scope = &components[position..end];
                if scope.iter().any(|c| c.is_empty()) {
                    return Err(self.not_specified(segment, input));
                }
                parsed.insert(segment.name.to_string(), format!("/{}", scope.join("/")));
                position = end;
                continue;
            }

            let Some(component) = components.get(position).copied() else {
                return Err(self.not_specified(segment, input));
            };
            if component.is_empty() {
                return Err(self.not_specified(segment, input));
            }

            let value = match segment.segment_type {
                SegmentType::Static | SegmentType::ResourceProvider => {
                    let expected = segment.fixed_value.unwrap_or_default();
                    if !matches_value(component, expected, insensitively) {
                        return Err(self.not_specified(segment, input));
                    }
                    expected.to_string()
                }
                SegmentType::Constant => {
                    match segment
                        .possible_values
                        .iter()
                        .find(|candidate| matches_value(component, candidate, insensitively))
                    {
                        Some(candidate) => candidate.to_string(),
                        None => return Err(self.not_specified(segment, input)),
                    }
                }
                _ => component.to_string(),
            };

            parsed.insert(segment.name.to_string(), value);
            position += 1;
        }

        if position < components.len() {
            return Err(self.invalid(
                input,
                &format!(
                    "unexpected trailing segments {:?}",
                    components[position..].join("/")
                ),
            ));
        }

        Ok(ParseResult {
            id_type: self.id_type,
            parsed,
            raw_input: input.to_string(),
        })
    }

    fn not_specified(&self, segment: &Segment, input: &str) -> ArmError {
        ArmError::SegmentNotSpecified {
            id_type: self.id_type.to_string(),
            segment: segment.name.to_string(),
            input: input.to_string(),
        }
    }

    fn invalid(&self, input: &str, reason: &str) -> ArmError {
        ArmError::InvalidResourceId {
            id_type: self.id_type.to_string(),
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn matches_value(actual: &str, expected: &str, insensitively: bool) -> bool {
    if insensitively {
        actual.eq_ignore_ascii_case(expected)
    } else {
        actual == expected
    }
}

/// Behaviour shared by every resource ID type.
pub trait ResourceId: Sized {
    /// Human-readable name used in error messages, e.g. `Storage Account`.
    const ID_TYPE: &'static str;

    fn segments() -> &'static [Segment];

    fn from_parse_result(result: &ParseResult) -> Result<Self>;

    /// Canonical path form of the ID.
    fn id(&self) -> String;

    /// Multi-line description listing each user-supplied component.
    fn describe(&self) -> String;

    /// Parses the path, matching fixed segments exactly.
    fn parse(input: &str) -> Result<Self> {
        let result = Parser::new(Self::ID_TYPE, Self::segments()).parse(input, false)?;
        Self::from_parse_result(&result)
    }

    /// Parses the path ignoring the casing of fixed segments, which are
    /// normalised to their canonical spelling.
    fn parse_insensitively(input: &str) -> Result<Self> {
        let result = Parser::new(Self::ID_TYPE, Self::segments()).parse(input, true)?;
        Self::from_parse_result(&result)
    }

    /// Values of the user-supplied segments in path order, keyed by segment name.
    fn segment_values(&self) -> Result<Vec<(&'static str, String)>> {
        let result = Parser::new(Self::ID_TYPE, Self::segments()).parse(&self.id(), false)?;
        Self::segments()
            .iter()
            .filter(|segment| segment.fixed_value.is_none())
            .map(|segment| Ok((segment.name, result.get(segment.name)?)))
            .collect()
    }

    /// Checks that `input` is a valid ID of this type, reporting failures against `key`.
    fn validate(input: &str, key: &str) -> Result<()> {
        Self::parse(input)
            .map(|_| ())
            .map_err(|e| ArmError::ValidationError {
                field: key.to_string(),
                message: e.to_string(),
            })
    }
}

/// Implements `Display` (canonical path) and `FromStr` (case-sensitive parse)
/// for a [`ResourceId`] type.
macro_rules! impl_resource_id_traits {
    ($name:ident) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::core::resourceids::ResourceId::id(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::utils::error::ArmError;

            fn from_str(input: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::core::resourceids::ResourceId>::parse(input)
            }
        }
    };
}

pub(crate) use impl_resource_id_traits;

/// Builds the `describe()` text from label/value pairs.
pub(crate) fn describe_components(id_type: &str, components: &[(&str, &str)]) -> String {
    let lines: Vec<String> = components
        .iter()
        .map(|(label, value)| format!("{}: {:?}", label, value))
        .collect();
    format!("{} ({})", id_type, lines.join("\n"))
}
