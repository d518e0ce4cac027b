//! Clock face renderer: canvas size + configuration + time → draw commands.

use crate::config::{ClockConfig, Color};
use crate::geometry::{numeral_label, Dial, DialShape};
use crate::scene::{DrawCommand, DrawSurface, Scene, TextMetrics};
use crate::time::{tick_angle, SampledTime};

const TICK_COUNT: u32 = 60;

/// Border, background, 60 ticks with 12 numerals, three hands.
const COMMANDS_PER_FRAME: usize = 2 + TICK_COUNT as usize + 12 + 3;

struct Hand {
    angle: f32,
    length: f32,
    width: f32,
    color: Color,
}

/// Builds the commands for one frame.
///
/// `metrics` gives the numeral font's vertical metrics at a given size; it is
/// only used to center numerals on their anchor.
pub fn build_frame<M>(
    metrics: M,
    width: u32,
    height: u32,
    config: &ClockConfig,
    shape: DialShape,
    time: SampledTime,
) -> Scene
where
    M: Fn(f32) -> TextMetrics,
{
    let dial = Dial::new(width as f32, height as f32, shape);
    let mut scene = Scene::with_capacity(COMMANDS_PER_FRAME);

    add_dial_background(&mut scene, &dial, config);

    let font_size = dial.min_size * config.ratio_text_size;
    add_ticks_and_numerals(&mut scene, &dial, config, font_size, metrics(font_size));

    // Hour hand goes last so it stays on top of the other two.
    let hands = [
        Hand {
            angle: time.second_angle(),
            length: config.ratio_length_second_hand,
            width: config.ratio_width_second_hand,
            color: config.color_second_hand,
        },
        Hand {
            angle: time.minute_angle(),
            length: config.ratio_length_minute_hand,
            width: config.ratio_width_minute_hand,
            color: config.color_minute_hand,
        },
        Hand {
            angle: time.hour_angle(),
            length: config.ratio_length_hour_hand,
            width: config.ratio_width_hour_hand,
            color: config.color_hour_hand,
        },
    ];
    for hand in &hands {
        add_hand(&mut scene, &dial, hand, config.ratio_length_tail_hand);
    }

    scene
}

/// Draws one frame of the clock onto `surface`.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    width: u32,
    height: u32,
    config: &ClockConfig,
    circular: bool,
    time: SampledTime,
) {
    let scene = build_frame(
        |size| surface.text_metrics(size),
        width,
        height,
        config,
        DialShape::from_circular(circular),
        time,
    );
    log::trace!(
        "rendering {} commands for {width}x{height} at {:02}:{:02}:{:02}",
        scene.commands().len(),
        time.hour,
        time.minute,
        time.second
    );
    scene.replay(surface);
}

fn add_dial_background(scene: &mut Scene, dial: &Dial, config: &ClockConfig) {
    let outer = dial.bounds();
    let inner = outer.inset(dial.min_size * config.ratio_width_clock_stroke);
    scene.add_command(DrawCommand::FilledOval {
        left: outer.left,
        top: outer.top,
        right: outer.right,
        bottom: outer.bottom,
        color: config.color_border,
    });
    scene.add_command(DrawCommand::FilledOval {
        left: inner.left,
        top: inner.top,
        right: inner.right,
        bottom: inner.bottom,
        color: config.color_background,
    });
}

fn add_ticks_and_numerals(
    scene: &mut Scene,
    dial: &Dial,
    config: &ClockConfig,
    font_size: f32,
    metrics: TextMetrics,
) {
    let small_radius = dial.min_size * config.ratio_radius_small_dot;
    let big_radius = dial.min_size * config.ratio_radius_big_dot;

    for i in 0..TICK_COUNT {
        let angle = tick_angle(i);
        let (x, y) = dial.point_at(angle, 1.0 - config.ratio_padding_dot);
        let mut radius = small_radius;
        if i % 5 == 0 {
            radius = big_radius;
            let (nx, ny) = dial.point_at(angle, 1.0 - config.ratio_padding_number);
            scene.add_command(DrawCommand::Text {
                x: nx,
                y: metrics.centered_baseline(ny),
                text: numeral_label(i),
                font_size,
                color: config.color_number,
            });
        }
        scene.add_command(DrawCommand::FilledCircle {
            cx: x,
            cy: y,
            radius,
            color: config.color_dot,
        });
    }
}

fn add_hand(scene: &mut Scene, dial: &Dial, hand: &Hand, tail: f32) {
    let (x0, y0) = dial.point_at(hand.angle, -tail);
    let (x1, y1) = dial.point_at(hand.angle, hand.length);
    scene.add_command(DrawCommand::Line {
        x0,
        y0,
        x1,
        y1,
        width: dial.min_size * hand.width,
        color: hand.color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn frame(width: u32, height: u32, circular: bool, time: SampledTime) -> Vec<DrawCommand> {
        let mut recorded = Vec::new();
        render(&mut recorded, width, height, &ClockConfig::default(), circular, time);
        recorded
    }

    fn lines(commands: &[DrawCommand]) -> Vec<(f32, f32, f32, f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Line { x0, y0, x1, y1, width, .. } => Some((x0, y0, x1, y1, width)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn frame_has_expected_command_mix() {
        let commands = frame(200, 200, false, SampledTime::default());
        assert_eq!(commands.len(), COMMANDS_PER_FRAME);

        let ovals = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FilledOval { .. }))
            .count();
        let dots = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FilledCircle { .. }))
            .count();
        let texts = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        assert_eq!((ovals, dots, texts, lines(&commands).len()), (2, 60, 12, 3));
    }

    #[test]
    fn border_ring_is_stroke_width_thick() {
        let commands = frame(200, 100, false, SampledTime::default());
        assert_eq!(
            commands[0],
            DrawCommand::FilledOval {
                left: 0.0,
                top: 0.0,
                right: 200.0,
                bottom: 100.0,
                color: Color::BLACK,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FilledOval {
                left: 2.0,
                top: 2.0,
                right: 198.0,
                bottom: 98.0,
                color: Color::WHITE,
            }
        );
    }

    #[test]
    fn numeral_precedes_its_big_dot() {
        let commands = frame(200, 200, false, SampledTime::default());
        match (&commands[2], &commands[3]) {
            (DrawCommand::Text { text, .. }, DrawCommand::FilledCircle { radius, .. }) => {
                assert_eq!(text, "12");
                assert!((radius - 3.4).abs() < EPS);
            }
            other => panic!("unexpected leading tick commands: {other:?}"),
        }
        match &commands[4] {
            DrawCommand::FilledCircle { radius, .. } => assert!((radius - 2.0).abs() < EPS),
            other => panic!("expected small dot, got {other:?}"),
        }
    }

    #[test]
    fn twelve_dot_and_numeral_positions() {
        let commands = frame(200, 200, false, SampledTime::default());
        let DrawCommand::Text { x, y, font_size, .. } = commands[2] else {
            panic!("expected numeral");
        };
        // Numeral anchor is 74% of the radius above center, baseline shifted
        // down by half of (ascent + descent) for a 20px font.
        assert!((font_size - 20.0).abs() < EPS);
        assert!((x - 100.0).abs() < EPS);
        assert!((y - (100.0 - 74.0 + 6.0)).abs() < EPS);

        let DrawCommand::FilledCircle { cx, cy, .. } = commands[3] else {
            panic!("expected dot");
        };
        assert!((cx - 100.0).abs() < EPS);
        assert!((cy - 10.0).abs() < EPS);
    }

    #[test]
    fn hands_drawn_second_minute_hour() {
        let config = ClockConfig::builder()
            .color_second_hand(Color::new(1, 0, 0))
            .color_minute_hand(Color::new(2, 0, 0))
            .color_hour_hand(Color::new(3, 0, 0))
            .build();
        let mut recorded: Vec<DrawCommand> = Vec::new();
        render(&mut recorded, 120, 120, &config, true, SampledTime::new(7, 41, 12));
        let colors: Vec<Color> = recorded
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, [Color::new(1, 0, 0), Color::new(2, 0, 0), Color::new(3, 0, 0)]);
    }

    #[test]
    fn hand_widths_scale_with_min_size() {
        let commands = frame(400, 200, false, SampledTime::default());
        let widths: Vec<f32> = lines(&commands).iter().map(|l| l.4).collect();
        assert!((widths[0] - 2.0).abs() < EPS);
        assert!((widths[1] - 4.0).abs() < EPS);
        assert!((widths[2] - 6.0).abs() < EPS);
    }

    #[test]
    fn circular_hands_pivot_on_offset_center() {
        let commands = frame(300, 150, true, SampledTime::new(3, 0, 0));
        let hour = lines(&commands)[2];
        // Tail 0.2 × 75 behind center, tip 0.7 × 75 ahead, pointing right.
        assert!((hour.0 - (150.0 - 15.0)).abs() < EPS);
        assert!((hour.1 - 75.0).abs() < EPS);
        assert!((hour.2 - (150.0 + 52.5)).abs() < EPS);
        assert!((hour.3 - 75.0).abs() < EPS);
    }

    #[test]
    fn degenerate_canvas_does_not_panic() {
        let commands = frame(0, 0, false, SampledTime::new(10, 10, 10));
        assert_eq!(commands.len(), COMMANDS_PER_FRAME);
        let commands = frame(0, 50, true, SampledTime::new(10, 10, 10));
        assert_eq!(commands.len(), COMMANDS_PER_FRAME);
    }
}
