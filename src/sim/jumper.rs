//! The player-controlled jumper
//!
//! The jumper never moves horizontally on screen. A move request only
//! changes its heading and advances its world x; the scenery scrolls the
//! other way. Vertical motion is a small state machine driven one step per
//! tick:
//!
//! ```text
//! NotJumping --jump()--> Rising --(max steps | ceiling)--> Falling --(landed)--> NotJumping
//! NotJumping --(walked off a ledge)--> Falling
//! ```

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::geom::{Body, Facing, Heading, Rect};
use crate::consts::{PROBE_HEIGHT_DEN, PROBE_HEIGHT_NUM};

/// Vertical movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalMode {
    #[default]
    NotJumping,
    Rising,
    Falling,
}

/// Which sprite image the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    RunningLeft,
    RunningRight,
    JumpLeft,
    JumpRight,
}

impl Pose {
    pub fn image_name(&self) -> &'static str {
        match self {
            Pose::RunningLeft => "runningLeft",
            Pose::RunningRight => "runningRight",
            Pose::JumpLeft => "jumpLeft",
            Pose::JumpRight => "jumpRight",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jumper {
    /// World position (x unbounded, never wrapped) and sprite size
    body: Body,
    /// Fixed on-screen x
    screen_x: i32,
    heading: Heading,
    facing: Facing,
    vertical: VerticalMode,
    rise_steps: u32,
    max_up_steps: u32,
    /// Vertical step: half a brick height
    vert_step: i32,
    /// Horizontal step: the brick map's move size
    move_size: i32,
}

impl Jumper {
    /// Stand a jumper of `size` at `screen_x`, on the highest brick under its centre
    pub fn spawn(grid: &BrickGrid, screen_x: i32, size: IVec2, max_up_steps: u32) -> Self {
        let floor = grid.find_floor_height(screen_x + size.x / 2);
        let body = Body::new(IVec2::new(screen_x, floor - size.y), size);
        log::debug!(
            "Jumper spawned at world ({}, {}) on floor {}",
            body.pos.x,
            body.pos.y,
            floor
        );
        Self {
            body,
            screen_x,
            heading: Heading::Still,
            facing: Facing::Right,
            vertical: VerticalMode::NotJumping,
            rise_steps: 0,
            max_up_steps,
            vert_step: (grid.tile_height() / 2).max(1),
            move_size: grid.move_size(),
        }
    }

    pub fn world_pos(&self) -> IVec2 {
        self.body.pos
    }

    pub fn size(&self) -> IVec2 {
        self.body.size
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn vertical(&self) -> VerticalMode {
        self.vertical
    }

    pub fn rise_steps(&self) -> u32 {
        self.rise_steps
    }

    pub fn vert_step(&self) -> i32 {
        self.vert_step
    }

    pub fn move_size(&self) -> i32 {
        self.move_size
    }

    /// Bounding box in panel coordinates
    pub fn screen_rect(&self) -> Rect {
        Rect::new(self.screen_x, self.body.pos.y, self.body.size.x, self.body.size.y)
    }

    pub fn pose(&self) -> Pose {
        let airborne_still =
            self.vertical != VerticalMode::NotJumping && self.heading == Heading::Still;
        match (airborne_still, self.facing) {
            (true, Facing::Left) => Pose::JumpLeft,
            (true, Facing::Right) => Pose::JumpRight,
            (false, Facing::Left) => Pose::RunningLeft,
            (false, Facing::Right) => Pose::RunningRight,
        }
    }

    /// Whether the running animation should loop
    pub fn is_running(&self) -> bool {
        self.heading != Heading::Still
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
        match heading {
            Heading::Left => self.facing = Facing::Left,
            Heading::Right => self.facing = Facing::Right,
            Heading::Still => {}
        }
    }

    /// Start a jump; ignored unless standing
    pub fn jump(&mut self) {
        if self.vertical == VerticalMode::NotJumping {
            self.vertical = VerticalMode::Rising;
            self.rise_steps = 0;
            log::debug!("Jumper: NotJumping -> Rising");
        }
    }

    /// Would the next horizontal step put the base of the sprite inside a brick?
    ///
    /// Must be asked before `update()`. A `true` answer obliges the caller to
    /// cancel horizontal motion for the tick, for the jumper and the scenery.
    pub fn will_collide_horizontally(&self, grid: &BrickGrid) -> bool {
        if self.heading == Heading::Still {
            return false;
        }
        let x_test = self.body.pos.x + self.heading.sign() * self.move_size;
        let probe_x = x_test + self.body.size.x / 2;
        let probe_y = self.body.pos.y + self.body.size.y * PROBE_HEIGHT_NUM / PROBE_HEIGHT_DEN;
        grid.is_inside_brick(probe_x, probe_y)
    }

    /// Advance world position and the vertical state machine by one tick
    pub fn update(&mut self, grid: &BrickGrid) {
        if self.heading != Heading::Still {
            self.body.pos.x += self.heading.sign() * self.move_size;
            if self.vertical == VerticalMode::NotJumping {
                self.check_if_falling(grid);
            }
        }

        match self.vertical {
            VerticalMode::Rising => self.update_rising(grid),
            VerticalMode::Falling => self.update_falling(grid),
            VerticalMode::NotJumping => {}
        }
    }

    /// Walked off a ledge, or onto a brick lower than the probe height?
    ///
    /// Either way the falling step settles it: a positive step drops, a
    /// negative one lifts the jumper onto the brick.
    fn check_if_falling(&mut self, grid: &BrickGrid) {
        let drop =
            grid.check_falling_step(self.body.center_x(), self.body.bottom(), self.vert_step);
        if drop != 0 {
            self.vertical = VerticalMode::Falling;
            log::debug!("Jumper: floor moved by {}, NotJumping -> Falling", drop);
        }
    }

    fn update_rising(&mut self, grid: &BrickGrid) {
        // Negative when the head is already inside a brick
        let step = grid.check_rising_step(self.body.center_x(), self.body.pos.y, self.vert_step);
        self.body.pos.y -= step;
        if step > 0 {
            self.rise_steps += 1;
        }
        if step < self.vert_step || self.rise_steps >= self.max_up_steps {
            log::debug!(
                "Jumper: Rising -> Falling after {} steps (ceiling: {})",
                self.rise_steps,
                step < self.vert_step
            );
            self.vertical = VerticalMode::Falling;
            self.rise_steps = 0;
        }
    }

    fn update_falling(&mut self, grid: &BrickGrid) {
        // Negative when the feet are already inside a brick
        let step =
            grid.check_falling_step(self.body.center_x(), self.body.bottom(), self.vert_step);
        self.body.pos.y += step;
        if step < self.vert_step {
            self.vertical = VerticalMode::NotJumping;
            self.rise_steps = 0;
            log::debug!("Jumper: Falling -> NotJumping at y {}", self.body.pos.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_UP_STEPS;
    use crate::sim::bricks::tests::{OVERHANG_MAP, STEP_MAP, grid};
    use proptest::prelude::*;

    const SIZE: IVec2 = IVec2::new(16, 24);

    fn run_until_landed(jumper: &mut Jumper, grid: &BrickGrid, max_ticks: usize) -> usize {
        for tick in 1..=max_ticks {
            jumper.update(grid);
            if jumper.vertical() == VerticalMode::NotJumping {
                return tick;
            }
        }
        panic!("jumper never landed");
    }

    /// Neither the head row nor the foot row of the jumper is inside a brick
    fn is_clear(jumper: &Jumper, grid: &BrickGrid) -> bool {
        let x = jumper.body.center_x();
        !grid.is_inside_brick(x, jumper.body.pos.y)
            && !grid.is_inside_brick(x, jumper.body.bottom() - 1)
    }

    #[test]
    fn test_spawn_stands_on_highest_brick() {
        let grid = grid(STEP_MAP, 128);
        // Centre at x=72 is column 2, whose raised brick top is at y=64
        let jumper = Jumper::spawn(&grid, 64, SIZE, MAX_UP_STEPS);
        assert_eq!(jumper.world_pos(), IVec2::new(64, 40));
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);
        assert_eq!(jumper.vert_step(), 16);
        assert_eq!(jumper.move_size(), 8);

        let beside = Jumper::spawn(&grid, 20, SIZE, MAX_UP_STEPS);
        assert_eq!(beside.world_pos().y, 96 - 24);
    }

    #[test]
    fn test_rise_is_capped_at_max_up_steps() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 0, SIZE, MAX_UP_STEPS);
        let start_y = jumper.world_pos().y;
        jumper.jump();

        for i in 1..MAX_UP_STEPS {
            jumper.update(&grid);
            assert_eq!(jumper.vertical(), VerticalMode::Rising, "tick {}", i);
            assert_eq!(jumper.rise_steps(), i);
        }
        jumper.update(&grid);
        assert_eq!(jumper.vertical(), VerticalMode::Falling);
        assert_eq!(jumper.world_pos().y, start_y - MAX_UP_STEPS as i32 * 16);

        run_until_landed(&mut jumper, &grid, 20);
        assert_eq!(jumper.world_pos().y, start_y);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 0, SIZE, MAX_UP_STEPS);
        jumper.jump();
        jumper.update(&grid);
        jumper.jump();
        assert_eq!(jumper.rise_steps(), 1);
        jumper.update(&grid);
        assert_eq!(jumper.rise_steps(), 2);
    }

    #[test]
    fn test_ceiling_stops_rise_flush() {
        let grid = grid(OVERHANG_MAP, 160);
        // Stand in column 1 on the floor, walk under the overhang in column 2
        let mut jumper = Jumper::spawn(&grid, 40, SIZE, MAX_UP_STEPS);
        assert_eq!(jumper.world_pos().y, 128 - 24);
        jumper.set_heading(Heading::Right);
        for _ in 0..2 {
            assert!(!jumper.will_collide_horizontally(&grid));
            jumper.update(&grid);
        }
        assert_eq!(grid.column_at(jumper.body.center_x()), 2);
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);

        jumper.set_heading(Heading::Still);
        jumper.jump();
        jumper.update(&grid);
        jumper.update(&grid);
        assert_eq!(jumper.world_pos().y, 72);
        assert_eq!(jumper.vertical(), VerticalMode::Rising);

        // Overhang underside is y=64: only 8 of the 16 remain
        jumper.update(&grid);
        assert_eq!(jumper.world_pos().y, 64);
        assert_eq!(jumper.vertical(), VerticalMode::Falling);

        run_until_landed(&mut jumper, &grid, 20);
        assert_eq!(jumper.world_pos().y, 104);
    }

    #[test]
    fn test_moving_into_overhang_while_rising_stops_under_it() {
        let grid = grid(OVERHANG_MAP, 160);
        // Column 1, right beside the 32..64 overhang in column 2
        let mut jumper = Jumper::spawn(&grid, 52, SIZE, MAX_UP_STEPS);
        assert_eq!(jumper.world_pos().y, 104);
        jumper.jump();
        for _ in 0..3 {
            jumper.update(&grid);
        }
        assert_eq!(jumper.world_pos().y, 56);

        // Probe row 75 is below the overhang, so the step is allowed
        jumper.set_heading(Heading::Right);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.update(&grid);
        assert_eq!(grid.column_at(jumper.body.center_x()), 2);
        assert_eq!(jumper.world_pos().y, 64);
        assert_eq!(jumper.vertical(), VerticalMode::Falling);
        assert!(is_clear(&jumper, &grid));

        jumper.set_heading(Heading::Still);
        for _ in 0..20 {
            jumper.update(&grid);
            assert!(is_clear(&jumper, &grid));
        }
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);
        assert_eq!(jumper.world_pos().y, 104);
    }

    #[test]
    fn test_moving_onto_brick_while_falling_lands_on_top() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 50, SIZE, MAX_UP_STEPS);
        assert_eq!(grid.column_at(jumper.body.center_x()), 1);
        // Falling with the feet 2px below the raised brick's top at 64
        jumper.body.pos.y = 66 - SIZE.y;
        jumper.vertical = VerticalMode::Falling;

        jumper.set_heading(Heading::Right);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.update(&grid);
        assert_eq!(grid.column_at(jumper.body.center_x()), 2);
        assert_eq!(jumper.body.bottom(), 64);
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);
        assert!(is_clear(&jumper, &grid));

        // Standing on the raised brick from here on
        jumper.set_heading(Heading::Still);
        jumper.update(&grid);
        assert_eq!(jumper.body.bottom(), 64);
    }

    #[test]
    fn test_walking_onto_low_brick_steps_up() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 50, SIZE, MAX_UP_STEPS);
        // Feet 2px into the raised brick's row, below the probe height
        jumper.body.pos.y = 66 - SIZE.y;
        jumper.set_heading(Heading::Right);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.update(&grid);
        assert_eq!(jumper.body.bottom(), 64);
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);
    }

    fn action() -> impl Strategy<Value = u8> {
        0u8..5
    }

    proptest! {
        #[test]
        fn prop_jumper_never_ends_a_tick_inside_a_brick(
            overhang in any::<bool>(),
            spawn_x in 0i32..160,
            actions in proptest::collection::vec(action(), 1..160),
        ) {
            let grid = if overhang { grid(OVERHANG_MAP, 160) } else { grid(STEP_MAP, 128) };
            let mut jumper = Jumper::spawn(&grid, spawn_x, SIZE, MAX_UP_STEPS);
            for a in actions {
                match a {
                    1 => jumper.set_heading(Heading::Left),
                    2 => jumper.set_heading(Heading::Right),
                    3 => jumper.set_heading(Heading::Still),
                    4 => jumper.jump(),
                    _ => {}
                }
                if jumper.will_collide_horizontally(&grid) {
                    jumper.set_heading(Heading::Still);
                }
                jumper.update(&grid);
                prop_assert!(
                    is_clear(&jumper, &grid),
                    "inside a brick at {:?}, {:?}",
                    jumper.world_pos(),
                    jumper.vertical()
                );
            }
        }
    }

    #[test]
    fn test_horizontal_probe_blocks_at_brick_height_only() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 40, SIZE, MAX_UP_STEPS);
        jumper.set_heading(Heading::Right);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.update(&grid);

        // Next step would put the probe (x=64, y=91) inside the raised brick
        assert!(jumper.will_collide_horizontally(&grid));
        jumper.set_heading(Heading::Left);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.set_heading(Heading::Still);
        assert!(!jumper.will_collide_horizontally(&grid));

        // Two rising steps lift the probe into the empty row 0
        jumper.jump();
        jumper.update(&grid);
        jumper.update(&grid);
        assert_eq!(jumper.world_pos().y, 40);
        jumper.set_heading(Heading::Right);
        assert!(!jumper.will_collide_horizontally(&grid));
    }

    #[test]
    fn test_walking_off_a_ledge_starts_falling() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 60, SIZE, MAX_UP_STEPS);
        assert_eq!(jumper.world_pos().y, 40);

        jumper.set_heading(Heading::Left);
        assert!(!jumper.will_collide_horizontally(&grid));
        jumper.update(&grid);
        assert_eq!(jumper.vertical(), VerticalMode::Falling);
        assert_eq!(jumper.world_pos(), IVec2::new(52, 56));

        jumper.set_heading(Heading::Still);
        let ticks = run_until_landed(&mut jumper, &grid, 10);
        assert_eq!(ticks, 2);
        assert_eq!(jumper.world_pos().y, 96 - 24);
    }

    #[test]
    fn test_world_x_is_never_wrapped() {
        let grid = grid("s bricks.png 1\n00000\n", 128);
        let mut jumper = Jumper::spawn(&grid, 0, SIZE, MAX_UP_STEPS);
        jumper.set_heading(Heading::Left);
        for _ in 0..100 {
            assert!(!jumper.will_collide_horizontally(&grid));
            jumper.update(&grid);
        }
        assert_eq!(jumper.world_pos().x, -800);
        assert_eq!(jumper.vertical(), VerticalMode::NotJumping);
        assert_eq!(jumper.screen_rect().x, 0);
    }

    #[test]
    fn test_pose_follows_state() {
        let grid = grid(STEP_MAP, 128);
        let mut jumper = Jumper::spawn(&grid, 0, SIZE, MAX_UP_STEPS);
        assert_eq!(jumper.pose(), Pose::RunningRight);
        assert!(!jumper.is_running());

        jumper.jump();
        assert_eq!(jumper.pose(), Pose::JumpRight);

        jumper.set_heading(Heading::Left);
        assert_eq!(jumper.pose(), Pose::RunningLeft);
        assert!(jumper.is_running());

        jumper.set_heading(Heading::Still);
        assert_eq!(jumper.pose(), Pose::JumpLeft);
        assert_eq!(jumper.pose().image_name(), "jumpLeft");
    }
}
