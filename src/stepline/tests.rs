//! Tests for the step line component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::canvas::{DrawOp, Recorder, DEFAULT_EMPTY_GLYPH};
    use crate::cells::CellCanvas;
    use crate::color::Color;
    use crate::layout::{MeasureSpec, Rect, Size};
    use crate::resources::Resources;
    use crate::Renderable;
    use bubbletea_rs::Model as BubbleTeaModel;
    use lipgloss_extras::lipgloss;
    use std::time::Duration;

    fn sized(width: u32, opts: &[StepLineOption]) -> Model {
        let mut line = new(opts);
        line.measure(MeasureSpec::Exactly(width), MeasureSpec::Exactly(2));
        line
    }

    fn drawn(line: &mut Model) -> Recorder {
        let mut rec = Recorder::new();
        line.draw(&mut rec);
        rec
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_new_with_no_options() {
        let line = new(&[]);
        let res = Resources::default();

        assert_eq!(line.max_progress(), 5);
        assert_eq!(line.current_progress(), 0);
        assert_eq!(line.duration(), Duration::from_millis(600));
        assert_eq!(line.enabled_progress_color(), Color::ACCENT);
        assert_eq!(line.disabled_progress_color(), Color::TRACK);
        assert_eq!(line.enabled_text_color(), Color::ACCENT);
        assert_eq!(line.disabled_text_color(), Color::MUTED);
        assert_eq!(line.text_size(), res.text_size);
        assert_eq!(line.progress_height(), res.progress_height);
        assert_eq!((line.view_width(), line.view_height()), (40, 2));
        assert_eq!(line.progress_fraction(), None);
        assert!(!line.is_animating());
        assert!(line.needs_redraw());
    }

    #[test]
    fn test_new_with_options() {
        let line = new(&[
            with_max_progress(12),
            with_current_progress(4),
            with_duration(Duration::from_millis(80)),
            with_enabled_progress_color(Color::rgb(1, 2, 3)),
            with_disabled_text_color(Color::rgb(4, 5, 6)),
            with_text_margin(3.0),
            with_progress_height(-2.0),
            with_fill_characters('=', '-'),
            with_bold_labels(),
        ]);

        assert_eq!(line.max_progress(), 12);
        assert_eq!(line.current_progress(), 4);
        assert_eq!(line.duration(), Duration::from_millis(80));
        assert_eq!(line.enabled_progress_color(), Color::rgb(1, 2, 3));
        assert_eq!(line.disabled_text_color(), Color::rgb(4, 5, 6));
        assert_eq!(line.text_margin(), 3.0);
        assert_eq!(line.progress_height(), 0.0);
        assert_eq!((line.full, line.empty), ('=', '-'));
        assert!(line.bold_labels);
        // construction never animates
        assert!(!line.is_animating());
    }

    #[test]
    fn test_resources_option_applies_first() {
        let res = Resources {
            view_width: 90,
            text_margin: 7.0,
            ..Resources::default()
        };
        let line = new(&[with_text_margin(1.0), with_resources(res)]);
        assert_eq!(line.view_width(), 90);
        assert_eq!(line.text_margin(), 1.0);
    }

    #[test]
    fn test_unique_ids() {
        let a = new(&[]);
        let b = new(&[]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_calculate_progress_valid_range() {
        for max in 1..=12 {
            for current in 0..=max {
                let line = sized(500, &[with_max_progress(max), with_current_progress(current)]);
                let expected = 500.0 * current as f32 / max as f32;
                assert!(
                    approx(line.calculate_progress(), expected),
                    "max={max} current={current}"
                );
            }
        }
    }

    #[test]
    fn test_calculate_progress_invalid_is_full_width() {
        let mut line = sized(500, &[with_max_progress(5), with_current_progress(7)]);
        assert_eq!(line.calculate_progress(), 500.0);

        line.current_progress = -1;
        assert_eq!(line.calculate_progress(), 500.0);

        // unreachable through setters, still guarded
        line.current_progress = 2;
        line.max_progress = -3;
        assert_eq!(line.calculate_progress(), 500.0);

        line.max_progress = 0;
        line.current_progress = 0;
        assert_eq!(line.calculate_progress(), 500.0);
    }

    #[test]
    fn test_negative_inputs_fall_back_to_defaults() {
        let mut line = new(&[with_max_progress(-2)]);
        assert_eq!(line.max_progress(), DEFAULT_MAX_PROGRESS);

        line.set_max_progress(9);
        line.set_max_progress(-1);
        assert_eq!(line.max_progress(), 5);

        line.set_duration_millis(250);
        assert_eq!(line.duration(), Duration::from_millis(250));
        line.set_duration_millis(-10);
        assert_eq!(line.duration(), DEFAULT_DURATION);

        line.set_text_size(f32::NAN);
        assert_eq!(line.text_size(), 0.0);
    }

    #[test]
    fn test_label_padding() {
        assert_eq!(label(1), "01");
        assert_eq!(label(2), "02");
        assert_eq!(label(9), "09");
        assert_eq!(label(10), "10");
        assert_eq!(label(11), "11");
        assert_eq!(label(100), "100");
    }

    #[test]
    fn test_first_draw_initializes_without_animating() {
        let mut line = sized(500, &[with_current_progress(2)]);
        assert_eq!(line.progress_fraction(), None);

        drawn(&mut line);
        assert_eq!(line.progress_fraction(), Some(200.0));
        assert_eq!(line.previous_fraction(), 200.0);
        assert!(!line.is_animating());
    }

    #[test]
    fn test_draw_protocol() {
        let mut line = sized(
            500,
            &[
                with_current_progress(3),
                with_progress_margin(4.0),
                with_progress_height(6.0),
                with_text_margin(2.0),
            ],
        );
        let rec = drawn(&mut line);

        let ops = rec.ops();
        assert_eq!(ops.len(), 7);
        assert!(matches!(ops[0], DrawOp::Rect { .. }));
        assert!(matches!(ops[1], DrawOp::Rect { .. }));

        let rects = rec.rects();
        assert_eq!(rects[0].0, Rect::new(0.0, 4.0, 300.0, 10.0));
        assert_eq!(rects[0].1.color, Color::ACCENT);
        assert_eq!(rects[1].0, Rect::new(300.0, 4.0, 500.0, 10.0));
        assert_eq!(rects[1].1.color, Color::TRACK);

        let texts = rec.texts();
        let labels: Vec<&str> = texts.iter().map(|t| t.0).collect();
        assert_eq!(labels, vec!["01", "02", "03", "04", "05"]);
        for (i, (_, x, y, paint)) in texts.iter().enumerate() {
            assert!(approx(*x, i as f32 * 100.0));
            assert_eq!(*y, 2.0);
            let expected = if i < 3 { Color::ACCENT } else { Color::MUTED };
            assert_eq!(paint.color, expected, "label {}", i + 1);
        }
    }

    #[test]
    fn test_invalid_progress_highlights_every_label() {
        let mut line = sized(500, &[with_current_progress(7)]);
        let rec = drawn(&mut line);
        assert_eq!(line.progress_fraction(), Some(500.0));
        assert!(rec.texts().iter().all(|t| t.3.color == Color::ACCENT));

        let mut line = sized(500, &[with_current_progress(-1)]);
        let rec = drawn(&mut line);
        assert_eq!(rec.rects()[0].0.right, 500.0);
        assert!(rec.texts().iter().all(|t| t.3.color == Color::ACCENT));
    }

    #[test]
    fn test_zero_steps_draws_full_bar_without_labels() {
        let mut line = sized(300, &[with_max_progress(0)]);
        let rec = drawn(&mut line);
        assert_eq!(rec.ops().len(), 2);
        assert_eq!(rec.rects()[0].0.right, 300.0);
        assert!(rec.texts().is_empty());
    }

    #[test]
    fn test_animation_scenario() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        assert_eq!(line.progress_fraction(), Some(0.0));

        std::mem::drop(line.set_current_progress(3));
        assert!(line.is_animating());
        assert_eq!(line.previous_fraction(), 300.0);
        match line.animation_state() {
            AnimationState::Animating(anim) => {
                assert_eq!(anim.from(), 0.0);
                assert_eq!(anim.to(), 300.0);
                assert_eq!(anim.duration(), Duration::from_millis(600));
            }
            AnimationState::Idle => panic!("expected a running animation"),
        }

        assert!(line.advance(Duration::from_millis(300)));
        let halfway = line.progress_fraction().unwrap();
        assert!((halfway - 150.0).abs() < 0.5);

        // interrupt: restart from the live boundary toward full width
        let old_tag = line.tag;
        std::mem::drop(line.set_current_progress(5));
        assert_eq!(line.tag, old_tag + 1);
        assert_eq!(line.previous_fraction(), 500.0);
        match line.animation_state() {
            AnimationState::Animating(anim) => {
                assert!((anim.from() - 150.0).abs() < 0.5);
                assert_eq!(anim.to(), 500.0);
                assert_eq!(anim.elapsed(), Duration::ZERO);
            }
            AnimationState::Idle => panic!("expected a running animation"),
        }

        assert!(!line.advance(Duration::from_millis(600)));
        assert_eq!(line.progress_fraction(), Some(500.0));
        assert_eq!(line.animation_state(), &AnimationState::Idle);
        assert!(!line.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_invalid_target_animates_to_full_width() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(7));
        line.advance(Duration::from_secs(1));
        assert_eq!(line.progress_fraction(), Some(500.0));
    }

    #[test]
    fn test_set_current_progress_before_first_draw() {
        let mut line = sized(500, &[with_current_progress(1)]);
        std::mem::drop(line.set_current_progress(2));
        match line.animation_state() {
            AnimationState::Animating(anim) => {
                assert_eq!(anim.from(), 100.0);
                assert_eq!(anim.to(), 200.0);
            }
            AnimationState::Idle => panic!("expected a running animation"),
        }
    }

    #[test]
    fn test_update_with_frame_msg_runs_to_completion() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(3));

        let mut frames = 0;
        loop {
            let msg = FrameMsg {
                id: line.id,
                tag: line.tag,
            };
            frames += 1;
            if line.update(Box::new(msg)).is_none() {
                break;
            }
            assert!(frames < 100, "animation never finished");
        }

        // 600ms at 60fps
        assert!((36..=38).contains(&frames));
        assert!(!line.is_animating());
        assert_eq!(line.progress_fraction(), Some(300.0));
    }

    #[test]
    fn test_update_ignores_foreign_and_stale_frames() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(2));
        let stale_tag = line.tag;
        std::mem::drop(line.set_current_progress(4));

        let wrong_id = FrameMsg {
            id: line.id + 999,
            tag: line.tag,
        };
        assert!(line.update(Box::new(wrong_id)).is_none());

        let stale = FrameMsg {
            id: line.id,
            tag: stale_tag,
        };
        assert!(line.update(Box::new(stale)).is_none());
        assert_eq!(line.progress_fraction(), Some(0.0));

        assert!(line.update(Box::new("not a frame")).is_none());
    }

    #[test]
    fn test_zero_duration_jumps_on_first_frame() {
        let mut line = sized(500, &[with_duration(Duration::ZERO)]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(1));
        assert!(!line.advance(Duration::ZERO));
        assert_eq!(line.progress_fraction(), Some(100.0));
    }

    #[test]
    fn test_redraw_requests() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        assert!(!line.needs_redraw());

        line.set_duration(Duration::from_millis(10));
        line.set_duration_millis(20);
        assert!(!line.needs_redraw());

        line.set_enabled_text_color(Color::MUTED);
        line.set_text_margin(1.0);
        assert!(line.take_redraw_request());
        assert!(!line.take_redraw_request());

        line.set_max_progress(3);
        assert!(line.take_redraw_request());
        line.set_disabled_progress_color(Color::ACCENT);
        assert!(line.take_redraw_request());
        line.set_progress_height(2.0);
        assert!(line.take_redraw_request());

        std::mem::drop(line.set_current_progress(1));
        assert!(line.take_redraw_request());
        line.advance(Duration::from_millis(10));
        assert!(line.needs_redraw());
        drawn(&mut line);
        assert!(!line.needs_redraw());
    }

    #[test]
    fn test_measure_modes() {
        let mut line = new(&[]);
        assert_eq!(
            line.measure(MeasureSpec::Exactly(120), MeasureSpec::AtMost(10)),
            Size::new(120, 2)
        );
        assert_eq!(
            line.measure(MeasureSpec::Unspecified, MeasureSpec::Exactly(5)),
            Size::new(40, 5)
        );
        assert_eq!((line.view_width(), line.view_height()), (40, 5));
    }

    #[test]
    fn test_resize_recomputes_resting_boundary() {
        let mut line = sized(500, &[with_current_progress(1)]);
        drawn(&mut line);
        assert_eq!(line.progress_fraction(), Some(100.0));

        line.measure(MeasureSpec::Exactly(250), MeasureSpec::Exactly(2));
        assert_eq!(line.progress_fraction(), Some(50.0));
        assert_eq!(line.previous_fraction(), 50.0);
    }

    #[test]
    fn test_resize_clamps_running_animation() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(5));
        line.advance(Duration::from_millis(540));
        assert!(line.progress_fraction().unwrap() > 400.0);

        line.measure(MeasureSpec::Exactly(100), MeasureSpec::Exactly(2));
        assert_eq!(line.progress_fraction(), Some(100.0));

        // the course is cut to the new full width
        line.advance(Duration::from_millis(600));
        assert_eq!(line.progress_fraction(), Some(100.0));
        assert!(!line.is_animating());
    }

    #[test]
    fn test_resize_retargets_running_animation() {
        let mut line = sized(500, &[]);
        drawn(&mut line);
        std::mem::drop(line.set_current_progress(5));
        line.advance(Duration::from_millis(300));
        assert!(approx(line.progress_fraction().unwrap(), 250.0));

        line.measure(MeasureSpec::Exactly(1000), MeasureSpec::Exactly(2));
        assert!(line.is_animating());
        assert!(approx(line.progress_fraction().unwrap(), 250.0));
        assert_eq!(line.previous_fraction(), 1000.0);

        // the remaining 300ms carry the boundary to the new full width
        line.advance(Duration::from_millis(150));
        assert!(approx(line.progress_fraction().unwrap(), 625.0));
        line.advance(Duration::from_millis(600));
        assert!(!line.is_animating());
        assert_eq!(line.progress_fraction(), Some(line.calculate_progress()));
        assert_eq!(line.progress_fraction(), Some(1000.0));
    }

    #[test]
    fn test_from_attributes() {
        let attrs = Attributes::parse_markup(
            r##"app:maxProgress="4" app:currentProgress="1" app:progressDuration="-5"
                app:enableProgressColor="#112233" app:disableTextColor="oops"
                app:enableTextColor="#445566" app:progressHeight="3dp""##,
        )
        .unwrap();
        let line = Model::from_attributes(&Resources::default(), &attrs);

        assert_eq!(line.max_progress(), 4);
        assert_eq!(line.current_progress(), 1);
        assert_eq!(line.duration(), DEFAULT_DURATION);
        assert_eq!(line.enabled_progress_color(), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(line.enabled_text_color(), Color::rgb(0x44, 0x55, 0x66));
        assert_eq!(line.disabled_text_color(), Color::MUTED);
        assert_eq!(line.progress_height(), 3.0);
        assert!(!line.is_animating());
    }

    #[test]
    fn test_attributes_option_from_json() {
        let attrs = Attributes::from_json(r#"{ "maxProgress": -9, "textMargin": 1.5 }"#).unwrap();
        let line = new(&[with_attributes(attrs)]);
        assert_eq!(line.max_progress(), 5);
        assert_eq!(line.text_margin(), 1.5);
    }

    #[test]
    fn test_view_renders_cells() {
        let line = new(&[
            with_resources(Resources {
                view_width: 10,
                ..Resources::default()
            }),
            with_current_progress(2),
            with_fill_characters('#', '.'),
        ]);

        let view = line.view();
        assert_eq!(lipgloss::strip_ansi(&view), "0102030405\n####......");
        // viewing does not initialize the widget
        assert_eq!(line.progress_fraction(), None);
    }

    #[test]
    fn test_view_follows_animation() {
        let mut line = new(&[
            with_resources(Resources {
                view_width: 10,
                ..Resources::default()
            }),
            with_fill_characters('#', '.'),
        ]);
        std::mem::drop(line.set_current_progress(5));
        line.advance(Duration::from_millis(300));

        let view = lipgloss::strip_ansi(&line.view());
        assert_eq!(view.lines().nth(1), Some("#####....."));
    }

    #[test]
    fn test_view_uses_default_glyphs() {
        let line = new(&[]);
        let view = lipgloss::strip_ansi(&line.view());
        let empty: String = std::iter::repeat(DEFAULT_EMPTY_GLYPH).take(40).collect();
        assert_eq!(view.lines().nth(1), Some(empty.as_str()));
    }

    #[test]
    fn test_view_matches_full_label_pass() {
        let mut line = new(&[with_max_progress(1000), with_current_progress(700)]);
        let mut cells = CellCanvas::new(line.view_width(), line.view_height());
        line.draw(&mut cells);
        assert_eq!(line.view(), cells.render());
    }

    #[test]
    fn test_view_with_huge_step_count() {
        let line = new(&[with_max_progress(i32::MAX), with_fill_characters('#', '.')]);
        let view = lipgloss::strip_ansi(&line.view());
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].chars().count(), 40);
        assert!(rows[0].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rows[1], ".".repeat(40));
    }

    #[test]
    fn test_renderable_trait() {
        fn layout_and_draw<R: Renderable>(r: &mut R) -> Recorder {
            let size = r.measure(MeasureSpec::Exactly(60), MeasureSpec::Unspecified);
            assert_eq!(size, Size::new(60, 2));
            let mut rec = Recorder::new();
            r.draw(&mut rec);
            rec
        }

        let mut line = new(&[with_max_progress(3), with_current_progress(3)]);
        let rec = layout_and_draw(&mut line);
        assert_eq!(rec.rects()[0].0.right, 60.0);
        assert_eq!(rec.texts().len(), 3);
    }

    #[test]
    fn test_bubbletea_model_init() {
        let (line, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_none());
        assert_eq!(line.max_progress(), 5);
    }

    #[test]
    fn test_default_implementation() {
        let line = Model::default();
        assert_eq!(line.max_progress(), DEFAULT_MAX_PROGRESS);
        assert_eq!(line.current_progress(), DEFAULT_CURRENT_PROGRESS);
    }

    #[tokio::test]
    async fn test_tick_command_delivers_frame_for_this_widget() {
        let mut line = sized(500, &[with_duration(Duration::from_millis(50))]);
        drawn(&mut line);

        let msg = line.set_current_progress(1).await.expect("tick yields a message");
        let frame = msg.downcast_ref::<FrameMsg>().expect("frame message");
        assert_eq!((frame.id, frame.tag), (line.id, line.tag));

        assert!(line.update(msg).is_some());
        assert!(line.progress_fraction().unwrap() > 0.0);
    }
}
