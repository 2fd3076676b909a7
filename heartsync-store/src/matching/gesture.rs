use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a released card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRelease {
    Swipe(SwipeDirection),
    /// Not dragged far enough; the card springs back to center.
    SnapBack,
}

#[derive(Debug, Clone, Copy)]
pub struct SwipeGesture {
    threshold: f64,
}

impl SwipeGesture {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.abs() }
    }

    /// Only the horizontal delta matters. The threshold itself is not a swipe.
    pub fn resolve(&self, dx: f64) -> CardRelease {
        if dx > self.threshold {
            CardRelease::Swipe(SwipeDirection::Right)
        } else if dx < -self.threshold {
            CardRelease::Swipe(SwipeDirection::Left)
        } else {
            CardRelease::SnapBack
        }
    }
}
