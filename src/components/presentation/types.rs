//! Stage configuration embedded in the page as JSON.

use serde::Deserialize;

/// One slide of the deck.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlideData {
	/// Main heading.
	pub title: String,
	/// Optional line under the heading.
	pub subtitle: Option<String>,
	/// Body paragraphs, rendered in order.
	pub body: Vec<String>,
}

/// Delays of the scan gate, in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GateTiming {
	/// From touching the fingerprint to "verified".
	pub scan_ms: u64,
	/// From "verified" to the deck opening.
	pub grant_ms: u64,
	/// From the deck opening to the curtain lifting.
	pub curtain_ms: u64,
}

impl Default for GateTiming {
	fn default() -> Self {
		Self {
			scan_ms: 3000,
			grant_ms: 2000,
			curtain_ms: 300,
		}
	}
}

/// Status lines shown under the fingerprint, in the local language and English.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GateCopy {
	pub idle: String,
	pub idle_en: String,
	pub scanning: String,
	pub scanning_en: String,
	pub verified: String,
	pub verified_en: String,
	pub badge: String,
}

impl Default for GateCopy {
	fn default() -> Self {
		Self {
			idle: "আঙুল রাখুন".into(),
			idle_en: "TOUCH TO SCAN".into(),
			scanning: "স্ক্যান হচ্ছে...".into(),
			scanning_en: "SCANNING...".into(),
			verified: "যাচাইকৃত ✓".into(),
			verified_en: "IDENTITY VERIFIED".into(),
			badge: "ACCESS GRANTED".into(),
		}
	}
}

/// Complete stage configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageConfig {
	/// Page title.
	pub title: Option<String>,
	pub slides: Vec<SlideData>,
	/// Background music URL, started once the scan verifies.
	pub music: Option<String>,
	pub timing: GateTiming,
	pub copy: GateCopy,
}

impl StageConfig {
	/// Parse the JSON embedded in the page.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}
}
