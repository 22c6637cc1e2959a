use macroquad::prelude::{
    BLACK, Color, Conf, FilterMode, KeyCode, Texture2D, WHITE, clear_background, draw_text,
    draw_texture, is_key_down, is_quit_requested, measure_text, prevent_quit,
};

use skippy::assets::{AssetBundle, Sprite};
use skippy::game::params::GameParams;
use skippy::game::scene::{self, Canvas, Scene, SpriteKind};
use skippy::game::session::Input;

pub fn window_conf(params: &GameParams) -> Conf {
    Conf {
        window_title: "Skippy Turtle".to_owned(),
        window_width: params.window_width as i32,
        window_height: params.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// GPU copies of the sprite bundle.
pub struct Textures {
    player: Texture2D,
    obstacle: Texture2D,
    ground: Texture2D,
    background: Texture2D,
}

impl Textures {
    /// Uploads every sprite. Must run inside the window's main future.
    pub fn upload(assets: &AssetBundle) -> Self {
        // the window close button is reported through `poll_input` instead
        prevent_quit();

        Self {
            player: upload_sprite(&assets.player),
            obstacle: upload_sprite(&assets.obstacle),
            ground: upload_sprite(&assets.ground),
            background: upload_sprite(&assets.background),
        }
    }

    fn get(&self, kind: SpriteKind) -> &Texture2D {
        match kind {
            SpriteKind::Background => &self.background,
            SpriteKind::Obstacle => &self.obstacle,
            SpriteKind::Ground => &self.ground,
            SpriteKind::Player => &self.player,
        }
    }
}

fn upload_sprite(sprite: &Sprite) -> Texture2D {
    let texture = Texture2D::from_rgba8(
        sprite.width() as u16,
        sprite.height() as u16,
        sprite.image.as_raw(),
    );
    texture.set_filter(FilterMode::Nearest);
    texture
}

struct MacroquadCanvas<'a> {
    textures: &'a Textures,
}

impl Canvas for MacroquadCanvas<'_> {
    fn draw_sprite(&mut self, sprite: SpriteKind, x: f32, y: f32) {
        draw_texture(self.textures.get(sprite), x.round(), y.round(), WHITE);
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        measure_text(text, None, font_size as u16, 1.0).width
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: [u8; 3]) {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        let [r, g, b] = color;
        draw_text(
            text,
            x,
            y + dims.offset_y,
            font_size,
            Color::from_rgba(r, g, b, 255),
        );
    }
}

/// Draws one frame. The caller presents it with `next_frame`.
pub fn draw(scene: &Scene<'_>, textures: &Textures) {
    clear_background(BLACK);
    let mut canvas = MacroquadCanvas { textures };
    scene::render(scene, &mut canvas);
}

pub fn poll_input() -> Input {
    Input {
        quit: is_quit_requested(),
        jump: is_key_down(KeyCode::Space),
    }
}
