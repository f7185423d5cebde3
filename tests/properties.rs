//! Parametric invariants of the geometry engine.
//!
//! Each test sweeps a grid of inputs, collects every violation, and reports
//! them together so a regression shows its full shape instead of the first
//! failing case.

use zenwindow::*;

const MIN: Size = Size::new(320, 180);

fn report(failures: &[String]) {
    assert!(
        failures.is_empty(),
        "{} failures (showing up to 20):\n{}",
        failures.len(),
        failures.iter().take(20).cloned().collect::<Vec<_>>().join("\n")
    );
}

fn screens() -> Vec<ScreenInfo> {
    vec![
        ScreenInfo::full(Size::new(1920, 1080)),
        ScreenInfo::new(Rect::new(0, 25, 1440, 875), Size::new(1440, 900)),
        ScreenInfo::new(Rect::new(0, 0, 1080, 1880), Size::new(1080, 1920)),
        ScreenInfo::new(Rect::new(-2560, -200, 2560, 1400), Size::new(2560, 1440)),
    ]
}

fn videos() -> Vec<Size> {
    let mut v = vec![
        Size::new(1920, 1080),
        Size::new(3840, 2160),
        Size::new(1280, 544),
        Size::new(720, 1280),
        Size::new(1080, 1920),
        Size::new(640, 480),
        Size::new(100, 100),
        Size::new(176, 144),
        Size::new(4096, 1716),
        Size::new(1, 1),
    ];
    for w in (37..5000).step_by(613) {
        for h in (29..5000).step_by(587) {
            v.push(Size::new(w, h));
        }
    }
    v
}

#[test]
fn within_bounds_is_identity() {
    let max = Size::new(1280, 720);
    let mut failures = Vec::new();
    for w in (MIN.width..=max.width).step_by(37).chain([max.width]) {
        for h in (MIN.height..=max.height).step_by(23).chain([max.height]) {
            let video = Size::new(w, h);
            let got = resolve_size(MIN, max, video, SizeOptions::default());
            if got != video {
                failures.push(format!("{video:?} → {got:?}"));
            }
        }
    }
    report(&failures);
}

#[test]
fn never_below_minimum() {
    let mins = [MIN, Size::new(480, 270), Size::new(200, 400), Size::new(1, 1)];
    let maxes = [Size::new(1280, 720), Size::new(1920, 1080), Size::new(720, 1280)];
    let mut failures = Vec::new();
    for &min in &mins {
        for &max in &maxes {
            for video in videos() {
                for existed in [false, true] {
                    let opts = SizeOptions::default()
                        .video_existed(existed)
                        .screen_size(Size::new(1920, 1080));
                    let got = resolve_size(min, max, video, opts);
                    if got.width < min.width || got.height < min.height {
                        failures.push(format!(
                            "min {min:?} max {max:?} {video:?} existed={existed} → {got:?}"
                        ));
                    }
                }
            }
        }
    }
    report(&failures);
}

#[test]
fn never_above_effective_maximum_unless_minimum_forces_it() {
    let max = Size::new(1280, 720);
    let screen = Size::new(1920, 1080);
    let mut failures = Vec::new();
    for video in videos() {
        for existed in [false, true] {
            let opts = SizeOptions {
                video_existed: existed,
                screen_size: Some(screen),
            };
            let got = resolve_size(MIN, max, video, opts);
            let limit = if existed { screen } else { max };
            let forced_by_min = got.width == MIN.width || got.height == MIN.height;
            if !forced_by_min && (got.width > limit.width || got.height > limit.height) {
                failures.push(format!("{video:?} existed={existed} → {got:?} over {limit:?}"));
            }
        }
    }
    report(&failures);
}

#[test]
fn window_rect_stays_on_screen() {
    let mut failures = Vec::new();
    for screen in screens() {
        let usable = screen.usable;
        for video in videos() {
            for existed in [false, true] {
                for (dx, dy) in [(-900, -900), (0, 0), (333, 127), (5000, 5000)] {
                    let old = Rect::new(usable.left + dx, usable.top + dy, 640, 360);
                    let rect = compute_window_rect(
                        video,
                        existed,
                        old,
                        None,
                        &screen,
                        &EngineConfig::default(),
                    );
                    // Only a window forced past the screen by the minimum may stick out.
                    let fits = rect.width <= usable.width && rect.height <= usable.height;
                    if fits && !usable.contains(&rect) {
                        failures.push(format!("{video:?} from {old:?} on {usable:?} → {rect:?}"));
                    }
                }
            }
        }
    }
    report(&failures);
}

#[test]
fn window_rect_is_idempotent() {
    let cfg = EngineConfig::default();
    let mut failures = Vec::new();
    for screen in screens() {
        for video in videos() {
            for existed in [false, true] {
                for max in [None, Some(Size::new(1280, 720))] {
                    let old = Rect::new(screen.usable.left + 101, screen.usable.top + 57, 641, 359);
                    let first = compute_window_rect(video, existed, old, max, &screen, &cfg);
                    let second = compute_window_rect(video, existed, first, max, &screen, &cfg);
                    if first != second {
                        failures.push(format!(
                            "{video:?} existed={existed} max={max:?}: {first:?} then {second:?}"
                        ));
                    }
                }
            }
        }
    }
    report(&failures);
}

#[test]
fn rotated_exit_round_trip_within_a_pixel() {
    let cfg = EngineConfig::default();
    let screen = ScreenInfo::full(Size::new(2560, 1440));
    let mut failures = Vec::new();
    for (w, h) in [(405, 720), (540, 960), (333, 592), (361, 641), (720, 1280)] {
        for (left, top) in [(600, 100), (1000, 120), (1500, 101)] {
            let start = Rect::new(left, top, w, h);
            let there = WindowTransition::exit_fullscreen()
                .rotation(RotationAngle::Deg0, RotationAngle::Deg90)
                .last_size(start.size())
                .position(start.position());
            let Some(turned) = plan_window_update(&there, &screen, &cfg).rect else {
                failures.push(format!("{start:?}: no rect going there"));
                continue;
            };
            let back = WindowTransition::exit_fullscreen()
                .rotation(RotationAngle::Deg90, RotationAngle::Deg0)
                .last_size(turned.size())
                .position(turned.position());
            let Some(restored) = plan_window_update(&back, &screen, &cfg).rect else {
                failures.push(format!("{start:?}: no rect coming back"));
                continue;
            };
            if restored.size() != start.size()
                || (restored.left - start.left).abs() > 1
                || (restored.top - start.top).abs() > 1
            {
                failures.push(format!("{start:?} → {turned:?} → {restored:?}"));
            }
        }
    }
    report(&failures);
}

#[test]
fn no_rect_unless_orientation_class_changes() {
    let cfg = EngineConfig::default();
    let screen = ScreenInfo::full(Size::new(1920, 1080));
    for angle in RotationAngle::ALL {
        for last in RotationAngle::ALL {
            let t = WindowTransition::exit_fullscreen()
                .view("play-view")
                .rotation(angle, last)
                .last_size(Size::new(1280, 720))
                .position(Position::new(320, 180));
            let plan = plan_window_update(&t, &screen, &cfg);
            assert_eq!(
                plan.rect.is_some(),
                angle.class() != last.class(),
                "{angle:?} after {last:?}"
            );
            assert_eq!(plan.fullscreen, Some(false));
        }
    }
}

// ── examples ────────────────────────────────────────────────────────────

#[test]
fn example_clamped_to_max() {
    assert_eq!(
        resolve_size(MIN, Size::new(1280, 720), Size::new(1920, 1080), SizeOptions::default()),
        Size::new(1280, 720)
    );
}

#[test]
fn example_square_below_minimum() {
    assert_eq!(
        resolve_size(MIN, Size::new(1920, 1080), Size::new(100, 100), SizeOptions::default()),
        Size::new(320, 320)
    );
}

#[test]
fn example_windowed_portrait_scale() {
    assert_eq!(compute_scale(false, RotationAngle::Deg90, 0.5, 16.0 / 9.0), 2.0);
}

#[test]
fn example_exit_fullscreen_transposes_last_size() {
    let t = WindowTransition::exit_fullscreen()
        .rotation(RotationAngle::Deg0, RotationAngle::Deg90)
        .last_size(Size::new(720, 1280))
        .position(Position::new(600, 0));
    let screen = ScreenInfo::full(Size::new(2560, 1440));
    let plan = plan_window_update(&t, &screen, &EngineConfig::default());
    assert_eq!(plan.rect.map(|r| r.size()), Some(Size::new(1280, 720)));
}
