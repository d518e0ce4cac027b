//! Retained-mode draw commands produced for one frame.

use crate::config::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Ellipse filling the box `(left, top)`–`(right, bottom)`.
    FilledOval {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        color: Color,
    },
    FilledCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        color: Color,
    },
    /// Horizontally centered on `x`, baseline at `y`.
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        color: Color,
    },
}

/// Vertical font metrics at a given size.
///
/// `ascent` is the height above the baseline (positive), `descent` the depth
/// below it (negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    /// Proportions of a typical sans-serif face, for surfaces without a font.
    pub fn approximate(font_size: f32) -> Self {
        Self {
            ascent: font_size * 0.8,
            descent: -font_size * 0.2,
        }
    }

    /// Baseline that vertically centers a line of text on `center_y`.
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y + (self.ascent + self.descent) / 2.0
    }
}

/// Anything that can execute draw commands.
pub trait DrawSurface {
    fn text_metrics(&self, font_size: f32) -> TextMetrics {
        TextMetrics::approximate(font_size)
    }

    fn draw(&mut self, command: &DrawCommand);
}

/// Records commands instead of drawing them.
impl DrawSurface for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

/// Ordered command list for a single frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Issues every command to `surface` in order.
    pub fn replay<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            surface.draw(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_preserves_order() {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::FilledCircle {
            cx: 1.0,
            cy: 2.0,
            radius: 3.0,
            color: Color::BLACK,
        });
        scene.add_command(DrawCommand::Text {
            x: 0.0,
            y: 0.0,
            text: "12".to_string(),
            font_size: 10.0,
            color: Color::WHITE,
        });

        let mut recorded: Vec<DrawCommand> = Vec::new();
        scene.replay(&mut recorded);
        assert_eq!(recorded.as_slice(), scene.commands());
    }

    #[test]
    fn centered_baseline_shifts_down_by_half_cap_height() {
        let metrics = TextMetrics { ascent: 8.0, descent: -2.0 };
        assert_eq!(metrics.centered_baseline(50.0), 53.0);
    }

    #[test]
    fn approximate_metrics_scale_with_size() {
        let m = TextMetrics::approximate(20.0);
        assert_eq!(m.ascent, 16.0);
        assert_eq!(m.descent, -4.0);
    }
}
