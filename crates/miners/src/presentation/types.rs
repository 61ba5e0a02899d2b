//! Declarative presentation items and the actions bound to them.

use serde::{Deserialize, Serialize};

use crate::deposits::{DepositId, IconId, SpaceObjectId};

/// Which surface a listing is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// The compact in-sector block.
    Compact,
    /// The full context-menu catalog of every mined deposit.
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Header,
    Summary,
    Separator,
    Deposit,
}

/// Widget style the host should draw the item with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStyle {
    HeaderText,
    TextButton,
    Label,
    ProgressButton,
    ProgressButtonThin,
    TextButtonThin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRange {
    pub min: f32,
    pub max: f32,
    pub value: f32,
}

/// Identifies one compact item within one aggregation pass.
///
/// A handle from an earlier pass never resolves, even if the same deposit is
/// listed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemHandle {
    pub generation: u64,
    pub deposit: DepositId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatchTarget {
    pub handle: ItemHandle,
    pub object: SpaceObjectId,
}

/// What happens when an item (or its icon) is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemAction {
    /// Order a drill rig out to the deposit.
    Deploy(DispatchTarget),
    /// Order the deposit's drill rig home.
    Retrieve(DispatchTarget),
    /// Center the map view on the deposit's body.
    Focus {
        deposit: DepositId,
        object: SpaceObjectId,
    },
    /// Informational popup, used for deposits outside the current location.
    ShowPopup {
        icon: IconId,
        title: String,
        text: String,
    },
    OpenSurface(Surface),
    CloseSurface(Surface),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationItem {
    pub kind: ItemKind,
    pub style: ItemStyle,
    pub deposit: Option<DepositId>,
    pub icon: Option<IconId>,
    pub icon_tint: Option<[f32; 4]>,
    pub label: String,
    pub secondary_label: Option<String>,
    pub range: Option<ProgressRange>,
    pub click: Option<ItemAction>,
    pub icon_click: Option<ItemAction>,
    pub secondary_click: Option<ItemAction>,
    pub tooltip: Option<String>,
}

impl PresentationItem {
    pub fn new(kind: ItemKind, style: ItemStyle, label: impl Into<String>) -> Self {
        Self {
            kind,
            style,
            deposit: None,
            icon: None,
            icon_tint: None,
            label: label.into(),
            secondary_label: None,
            range: None,
            click: None,
            icon_click: None,
            secondary_click: None,
            tooltip: None,
        }
    }

    pub fn with_deposit(mut self, deposit: DepositId) -> Self {
        self.deposit = Some(deposit);
        self
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_icon_tint(mut self, tint: [f32; 4]) -> Self {
        self.icon_tint = Some(tint);
        self
    }

    pub fn with_secondary_label(mut self, text: impl Into<String>) -> Self {
        self.secondary_label = Some(text.into());
        self
    }

    /// Progress range `[0, max]` filled to `value`.
    pub fn with_range(mut self, max: f32, value: f32) -> Self {
        self.range = Some(ProgressRange {
            min: 0.0,
            max,
            value,
        });
        self
    }

    pub fn with_click(mut self, action: ItemAction) -> Self {
        self.click = Some(action);
        self
    }

    pub fn with_icon_click(mut self, action: ItemAction) -> Self {
        self.icon_click = Some(action);
        self
    }

    pub fn with_secondary_click(mut self, action: ItemAction) -> Self {
        self.secondary_click = Some(action);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn has_progress(&self) -> bool {
        self.range.is_some()
    }
}
