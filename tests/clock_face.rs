use dial_clock::{
    build_frame, AnalogClock, ClockConfig, Color, DialShape, DrawCommand, SampledTime, TextMetrics,
};

const EPS: f32 = 1e-3;

fn record(width: u32, height: u32, circular: bool, time: SampledTime) -> Vec<DrawCommand> {
    let mut clock = AnalogClock::new(ClockConfig::default());
    clock.set_circular(circular);
    let mut commands = Vec::new();
    clock.render_frame(&mut commands, width, height, time);
    commands
}

fn hand_tips(commands: &[DrawCommand]) -> Vec<(f32, f32)> {
    commands
        .iter()
        .filter_map(|c| match *c {
            DrawCommand::Line { x1, y1, .. } => Some((x1, y1)),
            _ => None,
        })
        .collect()
}

fn close(actual: (f32, f32), expected: (f32, f32)) -> bool {
    (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS
}

#[test]
fn three_o_clock_on_square_stretched_dial() {
    let commands = record(200, 200, false, SampledTime::new(3, 0, 0));
    let tips = hand_tips(&commands);
    assert_eq!(tips.len(), 3);

    // second (0.85 of radius) and minute (0.8) point straight up
    assert!(close(tips[0], (100.0, 15.0)), "second tip {:?}", tips[0]);
    assert!(close(tips[1], (100.0, 20.0)), "minute tip {:?}", tips[1]);
    // hour (0.7) points right, towards the 3
    assert!(close(tips[2], (170.0, 100.0)), "hour tip {:?}", tips[2]);
}

#[test]
fn circular_dial_on_wide_canvas() {
    let commands = record(300, 150, true, SampledTime::new(8, 20, 45));
    let DrawCommand::FilledOval { left, top, right, bottom, .. } = commands[0] else {
        panic!("frame must start with the border oval");
    };
    assert_eq!((left, top, right, bottom), (75.0, 0.0, 225.0, 150.0));
    assert_eq!(((left + right) / 2.0, (top + bottom) / 2.0), (150.0, 75.0));

    // Every tick dot sits at 90% of the 75px radius from (150, 75).
    for command in &commands {
        if let DrawCommand::FilledCircle { cx, cy, .. } = *command {
            let dist = ((cx - 150.0).powi(2) + (cy - 75.0).powi(2)).sqrt();
            assert!((dist - 67.5).abs() < EPS, "dot at distance {dist}");
        }
    }
}

#[test]
fn stretched_numerals_lie_on_an_ellipse() {
    let (width, height) = (320.0_f32, 180.0_f32);
    let metrics = TextMetrics::approximate;
    let scene = build_frame(
        metrics,
        width as u32,
        height as u32,
        &ClockConfig::default(),
        DialShape::Stretched,
        SampledTime::default(),
    );

    let font_size = height * 0.1;
    let shift = (metrics(font_size).ascent + metrics(font_size).descent) / 2.0;
    let (a, b) = (width / 2.0 * 0.74, height / 2.0 * 0.74);

    let mut numerals = Vec::new();
    for command in scene.commands() {
        if let DrawCommand::Text { x, y, text, .. } = command {
            let (dx, dy) = ((x - width / 2.0) / a, (y - shift - height / 2.0) / b);
            assert!((dx * dx + dy * dy - 1.0).abs() < 1e-3, "numeral {text} off the ellipse");
            numerals.push(text.clone());
        }
    }
    assert_eq!(
        numerals,
        ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]
    );
}

#[test]
fn identical_inputs_give_identical_frames() {
    let time = SampledTime::new(11, 59, 59);
    assert_eq!(record(250, 130, false, time), record(250, 130, false, time));
    assert_eq!(record(250, 130, true, time), record(250, 130, true, time));

    let clock = AnalogClock::default();
    let first = clock.rasterize(96, 64, time, None, Color::WHITE).unwrap();
    let second = clock.rasterize(96, 64, time, None, Color::WHITE).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn hour_hand_is_drawn_last() {
    let commands = record(200, 200, false, SampledTime::new(9, 15, 30));
    let last = commands.last().unwrap();
    let DrawCommand::Line { width, .. } = *last else {
        panic!("frame must end with a hand");
    };
    // 3% of the 200px minimum dimension
    assert!((width - 6.0).abs() < EPS);
}

#[test]
fn rasterized_frame_shows_border_and_face() {
    let clock = AnalogClock::default();
    let image = clock
        .rasterize(100, 100, SampledTime::new(3, 0, 0), None, Color::new(0, 0xff, 0))
        .unwrap();

    // Corner lies outside the dial and keeps the window background.
    assert_eq!(image.get_pixel(0, 0).0, [0, 0xff, 0, 0xff]);
    // Just inside the left edge is the black border ring.
    assert_eq!(image.get_pixel(1, 50).0, [0, 0, 0, 0xff]);
    // Upper right quadrant, clear of dots and hands, is plain white face.
    assert_eq!(image.get_pixel(70, 30).0, [0xff, 0xff, 0xff, 0xff]);
    // The hour hand at 3:00 runs right from the pivot.
    assert_eq!(image.get_pixel(75, 50).0, [0, 0, 0, 0xff]);
}
