//! GameView: projects a `GameSnapshot` onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The playfield is `columns` lanes by `NUM_ROWS` rows. Every lane is
//! `COLUMN_WIDTH` terminal characters wide with its glyph centered, the
//! character always stands in lane 0 and the last row is the ground.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{COLUMN_WIDTH, DINO_CHAR, JUMP_ARC_END, NUM_ROWS, OBSTACLE_CHAR};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Vertical placement of the character for a jump stage.
///
/// `lift` is rows above the ground, `height` the number of stacked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub lift: u16,
    pub height: u16,
}

/// Map the engine's integral jump stage onto rows.
///
/// The arc rises for one row, peaks two rows up folded into a single cell, and
/// comes back down through the same row on the landing stage.
pub fn character_pose(jump_stage: i8) -> Pose {
    match jump_stage {
        s if s < 0 => Pose { lift: 0, height: 1 },
        0 => Pose { lift: 0, height: 2 },
        2 => Pose { lift: 2, height: 1 },
        s if s == 1 || s == JUMP_ARC_END => Pose { lift: 1, height: 2 },
        _ => Pose { lift: 0, height: 2 },
    }
}

const SKY: Rgb = Rgb::new(24, 28, 40);
const DINO: Rgb = Rgb::new(120, 220, 120);
const CACTUS: Rgb = Rgb::new(230, 170, 70);

/// A lightweight terminal renderer for the runner.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered playfield for `columns` lanes.
    pub fn frame_size(columns: u16) -> (u16, u16) {
        (columns * COLUMN_WIDTH + 2, NUM_ROWS + 2)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: callers reuse one framebuffer and
    /// it is only resized when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = Self::frame_size(snap.columns);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let sky = CellStyle::new(Rgb::new(80, 80, 90), SKY);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', sky);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let ground = NUM_ROWS - 1;

        let cactus = CellStyle::new(CACTUS, SKY).bold();
        for &offset in &snap.obstacles {
            self.write_lane(fb, start_x, start_y, offset, ground, OBSTACLE_CHAR, cactus);
        }

        let dino = CellStyle::new(DINO, SKY).bold();
        let pose = character_pose(snap.jump_stage);
        for i in 0..pose.height {
            let row = ground.saturating_sub(pose.lift + i);
            self.write_lane(fb, start_x, start_y, 0, row, DINO_CHAR, dino);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column of the glyph in `lane`, relative to the frame origin.
    pub fn lane_x(start_x: u16, lane: u16) -> u16 {
        start_x + 1 + lane * COLUMN_WIDTH + COLUMN_WIDTH / 2
    }

    #[allow(clippy::too_many_arguments)]
    fn write_lane(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        lane: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.put_char(Self::lane_x(start_x, lane), start_y + 1 + row, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            // The bottom edge doubles as the ground line.
            fb.put_char(x + dx, y + h - 1, '▀', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_u32(panel_x, start_y + 1, snap.score, value);
        fb.put_str(panel_x, start_y + 3, "w/␣ jump", value);
        fb.put_str(panel_x, start_y + 4, "s   duck", value);
        fb.put_str(panel_x, start_y + 5, "q   quit", value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
