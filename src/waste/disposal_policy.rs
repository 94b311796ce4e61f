use super::category::Category;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisposalAction {
    Recycle,
    Compost,
    Landfill,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinColor {
    Blue,
    Green,
    Black,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisposalPolicy {
    pub action: DisposalAction,
    pub bin_color: BinColor,
}

impl DisposalPolicy {
    pub const UNKNOWN: DisposalPolicy = DisposalPolicy {
        action: DisposalAction::Unknown,
        bin_color: BinColor::Unknown,
    };

    const RECYCLE: DisposalPolicy = DisposalPolicy {
        action: DisposalAction::Recycle,
        bin_color: BinColor::Blue,
    };
}

impl Category {
    pub fn disposal_policy(&self) -> DisposalPolicy {
        match self {
            Category::Cardboard
            | Category::Glass
            | Category::Metal
            | Category::Paper
            | Category::Plastic => DisposalPolicy::RECYCLE,
            Category::Organic => DisposalPolicy {
                action: DisposalAction::Compost,
                bin_color: BinColor::Green,
            },
            Category::Trash => DisposalPolicy {
                action: DisposalAction::Landfill,
                bin_color: BinColor::Black,
            },
        }
    }
}

/// Disposal policy for any label. Labels outside the known categories
/// resolve to `DisposalPolicy::UNKNOWN`.
pub fn lookup(label: &str) -> DisposalPolicy {
    Category::from_label(label)
        .map(|category| category.disposal_policy())
        .unwrap_or(DisposalPolicy::UNKNOWN)
}

impl fmt::Display for DisposalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisposalAction::Recycle => write!(f, "Recycle"),
            DisposalAction::Compost => write!(f, "Compost"),
            DisposalAction::Landfill => write!(f, "Landfill"),
            DisposalAction::Unknown => write!(f, "Unknown"),
        }
    }
}

impl fmt::Display for BinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinColor::Blue => write!(f, "Blue"),
            BinColor::Green => write!(f, "Green"),
            BinColor::Black => write!(f, "Black"),
            BinColor::Unknown => write!(f, "Unknown"),
        }
    }
}
