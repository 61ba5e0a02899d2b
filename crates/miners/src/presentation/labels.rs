//! Fixed strings shown by the listings. Host-side translation is out of scope.

pub const CATALOG_TITLE: &str = "Drill Rigs";
pub const KNOWN_DRILLS: &str = "Known drills";
pub const SHOW_DRILLS: &str = "Show drills";
pub const IN_SECTOR: &str = "In sector";
pub const SHOW: &str = "Show";
pub const LOCATION: &str = "Location";

pub const DRILL_ICON: &str = "icon.drill";
pub const PICKAXE_ICON: &str = "icon.pickaxe";
