//! Melt animation sequences, one per lost health point.
//!
//! A sequence is a plain iterator of [`Figure`]s. The frame loop draws and
//! presents each one in turn; nothing here touches the hardware.

use super::snowman::{
    Figure, Stage, ARM_LOW_Y, BODY_RADIUS, FEET_RADIUS, GROUND_Y, HEAD_RADIUS, NOSE_LOW_Y,
};

/// Frames of the final pose shown after the motion ends.
pub const SETTLE_FRAMES: u8 = 2;

/// The part that goes when health drops to a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Melt {
    Arms,
    Nose,
    Body,
    Feet,
    Head,
}

impl Melt {
    /// Melt for the health just reached.
    pub fn for_health(health: u8) -> Option<Self> {
        match health {
            4 => Some(Melt::Arms),
            3 => Some(Melt::Nose),
            2 => Some(Melt::Body),
            1 => Some(Melt::Feet),
            0 => Some(Melt::Head),
            _ => None,
        }
    }

    /// Health the snowman had while this part was still attached.
    fn before(self) -> u8 {
        match self {
            Melt::Arms => 5,
            Melt::Nose => 4,
            Melt::Body => 3,
            Melt::Feet => 2,
            Melt::Head => 1,
        }
    }

    fn after(self) -> u8 {
        self.before() - 1
    }

    pub fn frames(self, gravity: i32, shrink_step: i32) -> MeltFrames {
        let motion = match self {
            Melt::Arms => Motion::Falling { dy: 0, velocity: 0, ground: GROUND_Y - ARM_LOW_Y },
            Melt::Nose => Motion::Falling { dy: 0, velocity: 0, ground: GROUND_Y - NOSE_LOW_Y },
            Melt::Body => Motion::Shrinking { radius: BODY_RADIUS },
            Melt::Feet => Motion::Shrinking { radius: FEET_RADIUS },
            Melt::Head => Motion::Shrinking { radius: HEAD_RADIUS },
        };
        MeltFrames {
            melt: self,
            motion: Some(motion),
            settle: SETTLE_FRAMES,
            gravity: gravity.max(1),
            shrink_step: shrink_step.max(1),
        }
    }

    fn pose(self, motion: Motion) -> Figure {
        let figure = Stage::for_health(self.before()).figure();
        match (self, motion) {
            (Melt::Arms, Motion::Falling { dy, .. }) => Figure { arms: Some(dy), ..figure },
            (Melt::Nose, Motion::Falling { dy, .. }) => Figure { nose: Some(dy), ..figure },
            (Melt::Body, Motion::Shrinking { radius }) => Figure { body: radius, ..figure },
            (Melt::Feet, Motion::Shrinking { radius }) => Figure { feet: radius, ..figure },
            (Melt::Head, Motion::Shrinking { radius }) => Figure { head: radius, ..figure },
            _ => figure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    /// Displacement grows by `velocity`, which grows by gravity each frame.
    Falling { dy: i32, velocity: i32, ground: i32 },
    Shrinking { radius: i32 },
}

/// Poses of one melt, ending with [`SETTLE_FRAMES`] copies of the pose for
/// the new health.
#[derive(Debug, Clone)]
pub struct MeltFrames {
    melt: Melt,
    motion: Option<Motion>,
    settle: u8,
    gravity: i32,
    shrink_step: i32,
}

impl Iterator for MeltFrames {
    type Item = Figure;

    fn next(&mut self) -> Option<Figure> {
        if let Some(motion) = self.motion {
            self.motion = match motion {
                Motion::Falling { dy, velocity, ground } if dy < ground => {
                    let velocity = velocity + self.gravity;
                    Some(Motion::Falling { dy: (dy + velocity).min(ground), velocity, ground })
                }
                Motion::Shrinking { radius } if radius > 0 => {
                    Some(Motion::Shrinking { radius: (radius - self.shrink_step).max(0) })
                }
                _ => None,
            };
            return Some(self.melt.pose(motion));
        }

        if self.settle > 0 {
            self.settle -= 1;
            return Some(Stage::for_health(self.melt.after()).figure());
        }
        None
    }
}
