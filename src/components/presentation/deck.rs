//! Slide deck state: scan gate, current slide, finale.
//!
//! Pure state with no DOM access. The presentation component maps each
//! transition onto class changes and timers.

/// Progress of the fingerprint gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
	/// Waiting for a touch on the fingerprint.
	#[default]
	Locked,
	Scanning,
	/// Badge shown, deck about to open.
	Verified,
	/// Gate hidden, slides navigable.
	Open,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
	/// Now showing this slide.
	Moved(usize),
	/// Advanced past the last slide: close the curtain.
	Finale,
	Ignored,
}

/// Navigation intent decoded from a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
	Next,
	Prev,
}

impl NavKey {
	/// Map a `KeyboardEvent.code` to a direction.
	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"Space" | "ArrowRight" | "ArrowDown" | "Enter" => Some(NavKey::Next),
			"ArrowLeft" | "ArrowUp" => Some(NavKey::Prev),
			_ => None,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
	total: usize,
	current: usize,
	phase: GatePhase,
	finale: bool,
}

impl Deck {
	pub fn new(total: usize) -> Self {
		Self {
			total,
			..Self::default()
		}
	}

	pub fn total(&self) -> usize {
		self.total
	}

	pub fn current(&self) -> usize {
		self.current
	}

	pub fn phase(&self) -> GatePhase {
		self.phase
	}

	pub fn is_open(&self) -> bool {
		self.phase == GatePhase::Open
	}

	pub fn in_finale(&self) -> bool {
		self.finale
	}

	/// Whether slide `idx` is the one on screen.
	pub fn is_active(&self, idx: usize) -> bool {
		self.is_open() && self.current == idx
	}

	/// Start scanning. Repeated touches while scanning or after opening are ignored.
	pub fn begin_scan(&mut self) -> bool {
		if self.phase != GatePhase::Locked {
			return false;
		}
		self.phase = GatePhase::Scanning;
		true
	}

	pub fn verify(&mut self) -> bool {
		if self.phase != GatePhase::Scanning {
			return false;
		}
		self.phase = GatePhase::Verified;
		true
	}

	/// Open the deck on the first slide.
	pub fn open(&mut self) -> bool {
		if self.phase != GatePhase::Verified {
			return false;
		}
		self.phase = GatePhase::Open;
		self.current = 0;
		true
	}

	pub fn next(&mut self) -> Step {
		if !self.is_open() || self.total == 0 {
			return Step::Ignored;
		}
		if self.current + 1 < self.total {
			self.current += 1;
			Step::Moved(self.current)
		} else if !self.finale {
			self.finale = true;
			Step::Finale
		} else {
			Step::Ignored
		}
	}

	pub fn prev(&mut self) -> Step {
		if !self.is_open() || self.current == 0 {
			return Step::Ignored;
		}
		self.current -= 1;
		Step::Moved(self.current)
	}

	pub fn navigate(&mut self, key: NavKey) -> Step {
		match key {
			NavKey::Next => self.next(),
			NavKey::Prev => self.prev(),
		}
	}

	/// Width of the progress bar, 0 to 100.
	pub fn progress_percent(&self) -> f64 {
		if self.total == 0 {
			return 0.0;
		}
		(self.current + 1) as f64 / self.total as f64 * 100.0
	}
}
