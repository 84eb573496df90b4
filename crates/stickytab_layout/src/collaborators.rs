//! Capability traits for the views the composite arranges
//!
//! The composite never owns concrete header or hero skins. It asks for
//! heights through these traits and positions whatever implements them.

use std::fmt;

use stickytab_core::error::check_metric;
use stickytab_core::{Result, StickyError};

use crate::composite::StickyHeaderTabs;

/// Anything with an intrinsic height
pub trait HeightProvider: fmt::Debug {
    fn height(&self) -> f32;
}

/// A header that collapses down to `pinned_height` and then stays put
pub trait PinnableHeader: HeightProvider {
    /// Height left visible once the header is pinned
    fn pinned_height(&self) -> f32;
}

/// Observer notified after every vertical scroll the composite processes
pub trait StickyHeaderTabsDelegate {
    fn did_scroll_vertically(&mut self, tabs: &StickyHeaderTabs);
}

// ============================================================================
// Stock collaborators
// ============================================================================

/// Header with fixed full and pinned heights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHeader {
    height: f32,
    pinned_height: f32,
}

impl FixedHeader {
    /// Fails when either height is negative or non-finite, or when the
    /// pinned height exceeds the full height
    pub fn new(height: f32, pinned_height: f32) -> Result<Self> {
        let height = check_metric("header height", height)?;
        let pinned_height = check_metric("pinned height", pinned_height)?;
        if pinned_height > height {
            return Err(StickyError::PinnedExceedsHeight {
                pinned: pinned_height,
                height,
            });
        }
        Ok(Self {
            height,
            pinned_height,
        })
    }

    /// Resize the header. The owner must follow up with
    /// `StickyHeaderTabs::header_height_changed`.
    pub fn set_height(&mut self, height: f32) -> Result<()> {
        let height = check_metric("header height", height)?;
        if self.pinned_height > height {
            return Err(StickyError::PinnedExceedsHeight {
                pinned: self.pinned_height,
                height,
            });
        }
        self.height = height;
        Ok(())
    }
}

impl HeightProvider for FixedHeader {
    fn height(&self) -> f32 {
        self.height
    }
}

impl PinnableHeader for FixedHeader {
    fn pinned_height(&self) -> f32 {
        self.pinned_height
    }
}

/// Hero panel with a fixed height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHero {
    height: f32,
}

impl FixedHero {
    pub fn new(height: f32) -> Result<Self> {
        Ok(Self {
            height: check_metric("hero height", height)?,
        })
    }
}

impl HeightProvider for FixedHero {
    fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_header() {
        let header = FixedHeader::new(170.0, 60.0).unwrap();
        assert_eq!(header.height(), 170.0);
        assert_eq!(header.pinned_height(), 60.0);
    }

    #[test]
    fn test_fixed_header_rejects_bad_metrics() {
        assert_eq!(
            FixedHeader::new(50.0, 60.0),
            Err(StickyError::PinnedExceedsHeight {
                pinned: 60.0,
                height: 50.0
            })
        );
        assert!(FixedHeader::new(-1.0, 0.0).is_err());
        assert!(FixedHero::new(f32::NAN).is_err());

        let mut header = FixedHeader::new(170.0, 60.0).unwrap();
        assert!(header.set_height(40.0).is_err());
        assert_eq!(header.height(), 170.0);
        header.set_height(200.0).unwrap();
        assert_eq!(header.height(), 200.0);
    }
}
