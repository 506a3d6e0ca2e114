//! Turning a world into one frame of draw commands

use super::command::{DrawCommand, RenderSink};
use crate::sim::World;

/// Emit a frame: ribbons back to front, then bricks, jumper, fireball
pub fn draw_world(world: &World, sink: &mut dyn RenderSink) {
    let panel_width = world.grid.panel_width();

    for (layer, ribbon) in world.ribbons.iter().enumerate() {
        for span in ribbon.spans(panel_width) {
            sink.draw(DrawCommand::Ribbon {
                layer,
                image: ribbon.name.clone(),
                screen_x: span.screen_x,
                image_x: span.image_x,
                width: span.width,
            });
        }
    }

    for brick in world.scroller.bricks(&world.grid) {
        sink.draw(DrawCommand::Brick {
            screen_x: brick.screen_x,
            screen_y: brick.screen_y,
            image_id: brick.image_id,
        });
    }

    let jumper = world.jumper.screen_rect();
    sink.draw(DrawCommand::Sprite {
        image: world.jumper.pose().image_name().to_string(),
        x: jumper.x,
        y: jumper.y,
    });

    let fireball = world.fireball.pos();
    sink.draw(DrawCommand::Sprite {
        image: world.fireball.image().to_string(),
        x: fireball.x,
        y: fireball.y,
    });
}
