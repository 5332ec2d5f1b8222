//! GameView: maps a `core::GameSnapshot` (plus selection) into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::engine::SelectionView;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorPair, SlotIndex, GRID_SIZE, MAX_SHAPE_DIM, OFFER_SLOTS};

const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const TRAY_BG: Rgb = Rgb::new(20, 20, 28);
const TRAY_SELECTED_BG: Rgb = Rgb::new(60, 60, 84);
const INVALID_GHOST: Rgb = Rgb::new(255, 100, 100);
const GHOST_ALPHA: u8 = 100;

const SLOT_GAP: u16 = 2;
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 22;

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

/// What lies under a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell { x: u8, y: u8 },
    Slot(SlotIndex),
}

/// Terminal positions of every screen region for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left of grid cell (0, 0).
    pub grid_x: u16,
    pub grid_y: u16,
    pub tray_x: u16,
    pub tray_y: u16,
    pub slot_w: u16,
    pub tray_h: u16,
    pub panel_x: u16,
}

impl Layout {
    pub fn slot_x(&self, slot: SlotIndex) -> u16 {
        self.tray_x + slot.get() as u16 * (self.slot_w + SLOT_GAP)
    }
}

/// A lightweight terminal renderer for the block puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let grid_w = GRID_SIZE as u16 * self.cell_w;
        let grid_h = GRID_SIZE as u16 * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let slot_w = MAX_SHAPE_DIM as u16 * self.cell_w;
        let tray_w = OFFER_SLOTS as u16 * slot_w + (OFFER_SLOTS as u16 - 1) * SLOT_GAP;
        // One label row above the shape box.
        let tray_h = 1 + MAX_SHAPE_DIM as u16 * self.cell_h;

        let content_w = frame_w.max(tray_w);
        let content_h = frame_h + 1 + tray_h;
        let total_w = content_w + PANEL_GAP + PANEL_W;

        let left = viewport.width.saturating_sub(total_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        let frame_x = left + (content_w - frame_w) / 2;
        Layout {
            frame_x,
            frame_y: top,
            frame_w,
            frame_h,
            grid_x: frame_x + 1,
            grid_y: top + 1,
            tray_x: left + (content_w - tray_w) / 2,
            tray_y: top + frame_h + 1,
            slot_w,
            tray_h,
            panel_x: left + content_w + PANEL_GAP,
        }
    }

    /// Map a terminal position to a grid cell or a tray slot.
    pub fn hit_test(&self, viewport: Viewport, column: u16, row: u16) -> Option<Hit> {
        let l = self.layout(viewport);
        let grid_w = GRID_SIZE as u16 * self.cell_w;
        let grid_h = GRID_SIZE as u16 * self.cell_h;

        if (l.grid_x..l.grid_x + grid_w).contains(&column)
            && (l.grid_y..l.grid_y + grid_h).contains(&row)
        {
            return Some(Hit::Cell {
                x: ((column - l.grid_x) / self.cell_w) as u8,
                y: ((row - l.grid_y) / self.cell_h) as u8,
            });
        }

        if (l.tray_y..l.tray_y + l.tray_h).contains(&row) {
            return SlotIndex::ALL.into_iter().find_map(|slot| {
                let x = l.slot_x(slot);
                (x..x + l.slot_w).contains(&column).then_some(Hit::Slot(slot))
            });
        }

        None
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        selection: Option<&SelectionView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let l = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            l.grid_x,
            l.grid_y,
            GRID_SIZE as u16 * self.cell_w,
            GRID_SIZE as u16 * self.cell_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), GRID_BG),
        );
        self.draw_border(fb, l.frame_x, l.frame_y, l.frame_w, l.frame_h, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_origin(&l, x as u16, y as u16);
                match cell {
                    Some(filled) => self.draw_gradient_cell(fb, px, py, filled.colors),
                    None => self.draw_empty_cell(fb, px, py),
                }
            }
        }

        let ghost_drawn = match selection {
            Some(sel) if snap.playable() => self.draw_ghost(fb, &l, snap, sel),
            _ => false,
        };
        if let (Some(sel), false, true) = (selection, ghost_drawn, snap.playable()) {
            self.draw_cursor(fb, &l, sel.cursor_x as u16, sel.cursor_y as u16);
        }

        self.draw_tray(fb, &l, snap, selection.and_then(|s| s.selected));
        self.draw_side_panel(fb, &l, snap, selection, viewport);

        if !snap.playable() {
            self.draw_game_over(fb, &l, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        selection: Option<&SelectionView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, selection, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, l: &Layout, x: u16, y: u16) -> (u16, u16) {
        (l.grid_x + x * self.cell_w, l.grid_y + y * self.cell_h)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), GRID_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    /// Vertical two-stop gradient using upper half blocks: two color steps per terminal row.
    fn draw_gradient_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, colors: ColorPair) {
        let steps = (self.cell_h * 2 - 1).max(1) as f32;
        for row in 0..self.cell_h {
            let top = colors.start.lerp(colors.end, (row * 2) as f32 / steps);
            let bottom = colors.start.lerp(colors.end, (row * 2 + 1) as f32 / steps);
            let style = CellStyle::new(top.into(), bottom.into());
            fb.fill_rect(px, py + row, self.cell_w, 1, '▀', style);
        }
    }

    /// Preview of the selected block at the cursor. Returns false when the
    /// block's bounding box would stick out of the grid.
    fn draw_ghost(
        &self,
        fb: &mut FrameBuffer,
        l: &Layout,
        snap: &GameSnapshot,
        sel: &SelectionView,
    ) -> bool {
        let (Some(slot), Some(ghost)) = (sel.selected, sel.ghost) else {
            return false;
        };
        let shape = &snap.offered[slot.get()];
        let size = GRID_SIZE as i16;
        if ghost.anchor_x < 0
            || ghost.anchor_y < 0
            || ghost.anchor_x + shape.width() as i16 > size
            || ghost.anchor_y + shape.height() as i16 > size
        {
            return false;
        }

        let tint: Rgb = if ghost.valid {
            shape.colors().start.into()
        } else {
            INVALID_GHOST
        };
        let style = CellStyle::new(tint, GRID_BG.blend(tint, GHOST_ALPHA));
        for (dx, dy) in shape.cells() {
            let (px, py) = self.cell_origin(
                l,
                (ghost.anchor_x + dx as i16) as u16,
                (ghost.anchor_y + dy as i16) as u16,
            );
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
        }
        true
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, l: &Layout, x: u16, y: u16) {
        let (px, py) = self.cell_origin(l, x, y);
        let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or(GRID_BG);
        let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
        fb.put_char(px, py, '[', style);
        fb.put_char(px + self.cell_w - 1, py, ']', style);
    }

    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        l: &Layout,
        snap: &GameSnapshot,
        selected: Option<SlotIndex>,
    ) {
        for slot in SlotIndex::ALL {
            let x = l.slot_x(slot);
            let is_selected = selected == Some(slot);
            let bg = if is_selected { TRAY_SELECTED_BG } else { TRAY_BG };
            fb.fill_rect(x, l.tray_y, l.slot_w, l.tray_h, ' ', CellStyle::new(bg, bg));

            let mut label = CellStyle::new(Rgb::new(200, 200, 200), bg);
            if is_selected {
                label = label.bold();
            }
            fb.put_char(x, l.tray_y, (b'1' + slot.get() as u8) as char, label);

            self.draw_tray_shape(fb, x, l.tray_y + 1, &snap.offered[slot.get()]);
        }
    }

    fn draw_tray_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        let max = MAX_SHAPE_DIM as u16;
        let off_x = (max - shape.width() as u16) / 2 * self.cell_w;
        let off_y = (max - shape.height() as u16) / 2 * self.cell_h;
        for (dx, dy) in shape.cells() {
            self.draw_gradient_cell(
                fb,
                x + off_x + dx as u16 * self.cell_w,
                y + off_y + dy as u16 * self.cell_h,
                shape.colors(),
            );
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        l: &Layout,
        snap: &GameSnapshot,
        selection: Option<&SelectionView>,
        viewport: Viewport,
    ) {
        let panel_x = l.panel_x;
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let title = CellStyle::new(Rgb::new(80, 140, 240), PANEL_BG).bold();
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = CellStyle::new(Rgb::new(150, 150, 150), PANEL_BG);

        let mut y = l.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "LINES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.lines, value);
        y += 2;

        fb.put_str(panel_x, y, "BLOCK BLAST", title);
        y += 2;
        for line in ["Drag blocks to grid", "Clear rows or columns", "for points!"] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
        y += 1;
        for line in [
            "1-3    pick block",
            "arrows move",
            "enter  place",
            "r      restart",
            "q      quit",
        ] {
            fb.put_str(panel_x, y, line, help.dim());
            y += 1;
        }

        if let Some(err) = selection.and_then(|s| s.last_error) {
            y += 1;
            fb.put_str(panel_x, y, err.message(), CellStyle::new(INVALID_GHOST, PANEL_BG));
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, l: &Layout, score: u32) {
        let box_style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 60, 60));
        let inner_w = l.frame_w - 2;
        let mid_y = l.frame_y + l.frame_h / 2;
        fb.fill_rect(l.grid_x, mid_y.saturating_sub(2), inner_w, 5, ' ', box_style);

        let center = |w: u16| l.grid_x + inner_w.saturating_sub(w) / 2;

        let heading = "GAME OVER";
        let red = CellStyle::new(Rgb::new(230, 41, 55), box_style.bg).bold();
        fb.put_str(center(heading.len() as u16), mid_y - 1, heading, red);

        let prefix = "Final Score: ";
        let w = prefix.len() as u16 + digit_count(score);
        let x = fb.put_str(center(w), mid_y, prefix, box_style);
        fb.put_u32(x, mid_y, score, box_style);

        let hint = "Press R to Restart";
        let blue = CellStyle::new(Rgb::new(80, 140, 240), box_style.bg);
        fb.put_str(center(hint.len() as u16), mid_y + 1, hint, blue);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
