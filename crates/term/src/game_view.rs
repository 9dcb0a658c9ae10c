//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every layout rule can be unit-tested.

use crate::core::pieces::color_of;
use crate::core::{definition, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Data shown next to the board that does not live in the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    pub high_score: Option<u32>,
    /// The finished game beat the previous best score
    pub new_high_score: bool,
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const PANEL_MIN_WIDTH: u16 = 12;

/// Terminal color for a piece color
pub fn rgb_of(color: Color) -> Rgb {
    match color {
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Red => Rgb::new(220, 70, 70),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Pink => Rgb::new(240, 130, 200),
        Color::Blue => Rgb::new(80, 120, 220),
    }
}

pub struct GameView {
    /// Board cell width in terminal columns
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares typical terminal glyphs.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal size needed to show the board and its frame
    pub fn board_frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into a reusable framebuffer. Does not allocate once `fb` has
    /// reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.board_frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.board.get(x, y).flatten() {
                    Some(kind) => self.draw_block(fb, origin_x, origin_y, x, y, color_of(kind)),
                    None => self.fill_cell(
                        fb,
                        origin_x,
                        origin_y,
                        x,
                        y,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost) = snap.ghost {
                let style = CellStyle::new(rgb_of(active.color).shade(60), PLAYFIELD_BG).dim();
                for (dx, dy) in active.shape.filled_cells() {
                    self.fill_cell(fb, origin_x, origin_y, ghost.x + dx, ghost.y + dy, '░', style);
                }
            }
            for (x, y) in active.cells() {
                self.draw_block(fb, origin_x, origin_y, x, y, active.color);
            }
        }

        self.draw_panel(fb, snap, hud, viewport, origin_x + frame_w + 2, origin_y);

        let message = match snap.status {
            GameStatus::Idle => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = message {
            let mid_y = origin_y + frame_h / 2;
            self.draw_centered(fb, origin_x, frame_w, mid_y, text);
            if snap.status == GameStatus::GameOver && hud.new_high_score {
                self.draw_centered(fb, origin_x, frame_w, mid_y + 1, "NEW HIGH SCORE");
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', BORDER);
            fb.put_char(cx, bottom, '─', BORDER);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', BORDER);
            fb.put_char(right, cy, '│', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i8, y: i8, color: Color) {
        let style = CellStyle::new(rgb_of(color), PLAYFIELD_BG).bold();
        self.fill_cell(fb, ox, oy, x, y, '█', style);
    }

    /// Fill one board cell; coordinates outside the board are skipped
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = ox + 1 + x as u16 * self.cell_w;
        let py = oy + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if x >= viewport.width || viewport.width - x < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = top;
        for (label, value) in [
            ("SCORE", Some(snap.score)),
            ("LEVEL", Some(snap.level)),
            ("LINES", Some(snap.lines)),
            ("BEST", hud.high_score),
        ] {
            fb.put_str(x, y, label, LABEL);
            match value {
                Some(v) => fb.put_u32(x, y + 1, v, VALUE),
                None => fb.put_str(x, y + 1, "-", VALUE),
            }
            y += 3;
        }

        fb.put_str(x, y, "NEXT", LABEL);
        if let Some(kind) = snap.next_kind {
            self.draw_preview(fb, x, y + 1, kind);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let def = definition(kind);
        let style = CellStyle::new(rgb_of(def.color), Rgb::new(0, 0, 0)).bold();
        for (dx, dy) in def.shape.filled_cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
    }
}
