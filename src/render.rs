use std::collections::VecDeque;

use ggez::event::{self, EventHandler};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Image, Mesh, Rect};
use ggez::input::keyboard::{KeyCode, KeyMods};
use ggez::input::mouse::MouseButton;
use ggez::{timer, Context, GameResult};
use log::{debug, info};

use crate::board::{Piece, Square};
use crate::config::Settings;
use crate::geometry::{self, Geometry};
use crate::session::Session;

const RAY_WHITE: Color = Color {
    r: 245.0 / 255.0,
    g: 245.0 / 255.0,
    b: 245.0 / 255.0,
    a: 1.0,
};

const SELECTED_YELLOW: Color = Color {
    r: 253.0 / 255.0,
    g: 249.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

const TARGET_GREEN: Color = Color {
    r: 0.0,
    g: 228.0 / 255.0,
    b: 48.0 / 255.0,
    a: 1.0,
};

const ATLAS_COLUMNS: usize = 6;
const ATLAS_ROWS: usize = 2;
const HIGHLIGHT_WIDTH: f32 = 3.0;

/// Source rectangle of an atlas cell, in the normalized texture
/// coordinates `DrawParam::src` expects. White is the top row.
pub fn atlas_src(piece: Piece) -> Rect {
    let index = piece.atlas_index();
    let (col, row) = (index % ATLAS_COLUMNS, index / ATLAS_COLUMNS);
    let (w, h) = (1.0 / ATLAS_COLUMNS as f32, 1.0 / ATLAS_ROWS as f32);
    Rect::new(col as f32 * w, row as f32 * h, w, h)
}

fn to_ggez(rect: geometry::Rect) -> Rect {
    Rect::new(rect.x, rect.y, rect.w, rect.h)
}

/// Game owns the session plus the textures that draw it. Textures are
/// loaded once here and dropped with the Game.
pub struct Game {
    session: Session,
    geometry: Geometry,
    board_texture: Image,
    pieces_texture: Image,
    target_fps: u32,
    clicks: VecDeque<(f32, f32)>,
}

impl Game {
    pub fn new(ctx: &mut Context, settings: &Settings) -> GameResult<Game> {
        let board_texture = Image::new(ctx, &settings.board_image)?;
        let pieces_texture = Image::new(ctx, &settings.pieces_image)?;
        info!(
            "loaded board {}x{} and piece atlas {}x{}",
            board_texture.width(),
            board_texture.height(),
            pieces_texture.width(),
            pieces_texture.height()
        );
        Ok(Game {
            session: Session::new().enemy_click(settings.enemy_click),
            geometry: Geometry::STANDARD,
            board_texture,
            pieces_texture,
            target_fps: settings.target_fps,
            clicks: VecDeque::new(),
        })
    }

    fn draw_board(&self, ctx: &mut Context) -> GameResult<()> {
        let dest = self.geometry.board_rect();
        let scale = [
            dest.w / f32::from(self.board_texture.width()),
            dest.h / f32::from(self.board_texture.height()),
        ];
        graphics::draw(
            ctx,
            &self.board_texture,
            DrawParam::default().dest([dest.x, dest.y]).scale(scale),
        )
    }

    fn draw_pieces(&self, ctx: &mut Context) -> GameResult<()> {
        let cell_w = f32::from(self.pieces_texture.width()) / ATLAS_COLUMNS as f32;
        let cell_h = f32::from(self.pieces_texture.height()) / ATLAS_ROWS as f32;
        let scale = [self.geometry.cell / cell_w, self.geometry.cell / cell_h];
        for (square, piece) in self.session.board().pieces() {
            let dest = self.geometry.square_to_rect(square);
            graphics::draw(
                ctx,
                &self.pieces_texture,
                DrawParam::default()
                    .src(atlas_src(piece))
                    .dest([dest.x, dest.y])
                    .scale(scale),
            )?;
        }
        Ok(())
    }

    fn draw_highlight(&self, ctx: &mut Context, square: Square, color: Color) -> GameResult<()> {
        let rect = to_ggez(self.geometry.square_to_rect(square));
        let mesh = Mesh::new_rectangle(ctx, DrawMode::stroke(HIGHLIGHT_WIDTH), rect, color)?;
        graphics::draw(ctx, &mesh, DrawParam::default())
    }
}

impl EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        while timer::check_update_time(ctx, self.target_fps) {
            if let Some((x, y)) = self.clicks.pop_front() {
                let outcome = self.session.click_at(&self.geometry, x, y);
                debug!("click ({}, {}) -> {:?}", x, y, outcome);
            }
        }
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.clicks.push_back((x, y));
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _mods: KeyMods, repeat: bool) {
        match keycode {
            KeyCode::Escape => event::quit(ctx),
            KeyCode::R if !repeat => {
                self.clicks.clear();
                self.session.new_game();
            }
            _ => {}
        }
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, RAY_WHITE);
        self.draw_board(ctx)?;
        self.draw_pieces(ctx)?;
        let selection = self.session.selection();
        if let Some(square) = selection.selected {
            self.draw_highlight(ctx, square, SELECTED_YELLOW)?;
        }
        if let Some(square) = selection.target {
            self.draw_highlight(ctx, square, TARGET_GREEN)?;
        }
        graphics::present(ctx)
    }
}
