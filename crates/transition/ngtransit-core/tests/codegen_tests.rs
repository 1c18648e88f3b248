use ngtransit_core::{
    generate, Endpoint, Session, StyleField, StyleSnapshot, Timing, TransitionConfig, TriggerMode,
    IMPORT_LINE,
};
use ngtransit_test_fixtures::transitions;

fn load(name: &str) -> TransitionConfig {
    transitions::config(name)
        .unwrap_or_else(|e| panic!("fixture '{name}' should load: {e:#}"))
}

#[test]
fn golden_fixtures_match() {
    let keys = transitions::keys();
    assert!(!keys.is_empty());
    for name in keys {
        let cfg = load(&name);
        let expected = transitions::expected(&name).unwrap();
        assert_eq!(generate(&cfg), expected, "fixture {name}");
    }
}

#[test]
fn generation_is_deterministic() {
    for name in transitions::keys() {
        let cfg = load(&name);
        let reparsed: TransitionConfig =
            serde_json::from_str(&transitions::config_json(&name).unwrap()).unwrap();
        assert_eq!(generate(&cfg), generate(&cfg.clone()));
        assert_eq!(generate(&cfg), generate(&reparsed));
    }
}

#[test]
fn state_toggle_layout() {
    let mut cfg = load("fade-in");
    cfg.mode = TriggerMode::StateToggle;
    let expected = "trigger('fadeIn', [\n  state('hidden', style({\n      opacity: 0\n  })),\n  state('visible', style({\n      opacity: 1\n  })),\n  transition('hidden => visible', [\n    animate('300ms ease-in')\n  ]),\n  transition('visible => hidden', [\n    animate('300ms ease-in')\n  ])\n])";
    assert_eq!(generate(&cfg), expected);
}

#[test]
fn transform_components_keep_fixed_order() {
    let from = StyleSnapshot {
        opacity: 1.0,
        x: 10.0,
        y: 0.0,
        scale: 0.5,
        rotate: 90.0,
    };
    let cfg = TransitionConfig {
        trigger_name: "spin".into(),
        mode: TriggerMode::EnterLeave,
        from,
        to: StyleSnapshot::IDENTITY,
        timing: Timing::new(500, 0, "linear"),
    };
    let code = generate(&cfg);
    assert!(code.contains("transform: translate(10px, 0px) scale(0.5) rotate(90deg)"));
    assert!(code.contains("transform: translate(0px, 0px) scale(1) rotate(0deg)"));
    assert!(!code.contains("opacity"));
}

#[test]
fn unchanged_components_are_left_out() {
    let mut cfg = TransitionConfig::default();
    cfg.from = StyleSnapshot::IDENTITY.with(StyleField::Rotate, -45.0);
    let code = generate(&cfg);
    assert!(code.contains("transform: rotate(-45deg)"));
    assert!(!code.contains("translate"));
    assert!(!code.contains("scale"));
}

#[test]
fn fractional_values_print_like_slider_values() {
    let mut session = Session::default();
    session.set_field(Endpoint::From, StyleField::Opacity, 0.25);
    session.set_field(Endpoint::From, StyleField::X, 0.0);
    session.set_field(Endpoint::From, StyleField::Scale, 1.25);
    let code = session.code();
    assert!(code.contains("opacity: 0.25"));
    assert!(code.contains("transform: scale(1.25)"));
}

#[test]
fn negative_zero_prints_as_zero() {
    let mut cfg = TransitionConfig::default();
    cfg.from.x = -0.0;
    cfg.from.y = 12.0;
    let code = generate(&cfg);
    assert!(code.contains("translate(0px, 12px)"));
    assert!(!code.contains("-0px"));
}

#[test]
fn timing_literal_in_generated_code() {
    let mut cfg = TransitionConfig::default();
    cfg.timing = Timing::new(400, 150, "linear");
    assert!(generate(&cfg).contains("animate('400ms 150ms linear'"));
    cfg.timing = Timing::new(400, 0, "ease-out");
    assert!(generate(&cfg).contains("animate('400ms ease-out'"));
}

#[test]
fn import_line_is_stable() {
    assert_eq!(
        IMPORT_LINE,
        "import { trigger, state, style, animate, transition } from '@angular/animations';"
    );
}

#[test]
fn fixture_paths_exist() {
    for name in transitions::keys() {
        assert!(transitions::config_path(&name).unwrap().exists());
    }
    assert!(transitions::config_json("missing").is_err());
}
