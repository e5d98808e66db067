use std::{collections::HashMap, sync::LazyLock};

/// The fixed set of fictional original owners. Products store the owner as
/// free text (the display name); this table supplies validation and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerType {
    Tosim,
    WaffleBear,
    Tango,
    Nureong,
    Bapugae,
    Guphanyang,
}

static BY_DISPLAY_NAME: LazyLock<HashMap<&'static str, OwnerType>> =
    LazyLock::new(|| OwnerType::ALL.iter().map(|o| (o.display_name(), *o)).collect());

impl OwnerType {
    pub const ALL: [OwnerType; 6] = [
        OwnerType::Tosim,
        OwnerType::WaffleBear,
        OwnerType::Tango,
        OwnerType::Nureong,
        OwnerType::Bapugae,
        OwnerType::Guphanyang,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            OwnerType::Tosim => "Tosim",
            OwnerType::WaffleBear => "Waffle Bear",
            OwnerType::Tango => "Tango",
            OwnerType::Nureong => "Nureong",
            OwnerType::Bapugae => "Bapugae",
            OwnerType::Guphanyang => "Guphanyang",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OwnerType::Tosim => "🐰",
            OwnerType::WaffleBear => "🐻",
            OwnerType::Tango => "🐱",
            OwnerType::Nureong => "🐶",
            OwnerType::Bapugae => "🐕‍🦺",
            OwnerType::Guphanyang => "😼",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        BY_DISPLAY_NAME.get(name).copied()
    }
}
