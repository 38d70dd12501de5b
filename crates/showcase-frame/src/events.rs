//! Showcase protocol event taxonomy.
//!
//! Both directions of the channel speak `{name, args}` envelopes, but the
//! two directions use disjoint name namespaces: the showcase raises
//! `showcase.*` events towards the host, and the host sends `elfsquad.*`
//! messages towards the showcase.

/// Outbound name for the full configuration state message.
pub const CONFIGURATION_UPDATED: &str = "elfsquad.configurationUpdated";

/// Outbound name for the configuration step descriptor message.
pub const STEP_CHANGED: &str = "elfsquad.stepChanged";

/// Events the embedded showcase surface can raise towards the host.
///
/// The set is closed: an inbound envelope whose name is not in this
/// taxonomy is dropped by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseEvent {
    /// The showcase asks the host to recalculate and resend the configuration.
    TriggerConfigurationUpdate,
    UpdateRequirement,
    UpdateRequirements,
    UpdateImageValue,
    UpdateTextValue,
    UpdateLinkedConfigurationCardinality,
    RemoveLinkedConfiguration,
    DragStarted,
}

impl ShowcaseEvent {
    /// Number of event kinds; sizes the dispatch table.
    pub const COUNT: usize = 8;

    /// All kinds, in ordinal order.
    pub const ALL: [ShowcaseEvent; Self::COUNT] = [
        ShowcaseEvent::TriggerConfigurationUpdate,
        ShowcaseEvent::UpdateRequirement,
        ShowcaseEvent::UpdateRequirements,
        ShowcaseEvent::UpdateImageValue,
        ShowcaseEvent::UpdateTextValue,
        ShowcaseEvent::UpdateLinkedConfigurationCardinality,
        ShowcaseEvent::RemoveLinkedConfiguration,
        ShowcaseEvent::DragStarted,
    ];

    /// Wire name the showcase sends for this event.
    pub fn name(self) -> &'static str {
        match self {
            Self::TriggerConfigurationUpdate => "showcase.triggerConfigurationUpdate",
            Self::UpdateRequirement => "showcase.updateRequirement",
            Self::UpdateRequirements => "showcase.updateRequirements",
            Self::UpdateImageValue => "showcase.updateImageValue",
            Self::UpdateTextValue => "showcase.updateTextValue",
            Self::UpdateLinkedConfigurationCardinality => {
                "showcase.updateLinkedConfigurationCardinality"
            }
            Self::RemoveLinkedConfiguration => "showcase.removeLinkedConfiguration",
            Self::DragStarted => "showcase.dragStarted",
        }
    }

    /// Map an inbound envelope name to its event kind.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Stable index into kind-keyed tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
