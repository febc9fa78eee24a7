//! Stagger expansion
//!
//! One authored step fanned out across a resolved target list, each target
//! delayed by its position. Supports a linear cascade (document order) and
//! a 2-D grid cascade where delay follows row or column position instead of
//! flat index.

/// Which axis of a grid the cascade sweeps along
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridAxis {
    /// Delay grows per column; a whole column animates together
    X,
    /// Delay grows per row; a whole row animates together
    Y,
}

/// Delay pattern for fanning one step across many targets
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stagger {
    /// `delay = index * each`, in resolution (document) order
    Linear { each: f32 },
    /// Targets are laid out row-major in a `rows x cols` grid; delay grows
    /// along the chosen axis
    Grid {
        each: f32,
        rows: usize,
        cols: usize,
        axis: GridAxis,
    },
}

impl Stagger {
    pub fn linear(each: f32) -> Self {
        Stagger::Linear { each }
    }

    pub fn grid(each: f32, rows: usize, cols: usize, axis: GridAxis) -> Self {
        Stagger::Grid {
            each,
            rows,
            cols,
            axis,
        }
    }

    /// Delay for the target at `index` out of `count`
    pub fn delay_for_index(&self, index: usize, count: usize) -> f32 {
        debug_assert!(index < count.max(1));
        match *self {
            Stagger::Linear { each } => index as f32 * each,
            Stagger::Grid { each, cols, axis, .. } => {
                let cols = cols.max(1);
                let lane = match axis {
                    GridAxis::X => index % cols,
                    GridAxis::Y => index / cols,
                };
                lane as f32 * each
            }
        }
    }

    /// Largest delay across `count` targets
    pub fn max_delay(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        (0..count)
            .map(|i| self.delay_for_index(i, count))
            .fold(0.0_f32, f32::max)
    }

    /// Total duration of a staggered group whose per-target duration is
    /// `duration`: the last target's delay plus its own run
    pub fn group_duration(&self, count: usize, duration: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        self.max_delay(count) + duration
    }
}
