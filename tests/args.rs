//! Command-line menu descriptions, parsed through the public API.

use traymenu::{Configuration, Error, ErrorKind, MenuItem, Toolkit};

fn parse(args: &[&str]) -> traymenu::Result<Configuration> {
    Configuration::from_args(args.iter().copied())
}

#[test]
fn end_to_end_gtk_menu() {
    let cfg = parse(&[
        "gtk",
        "--item",
        "Edit: gedit",
        "--separator",
        "--submenu",
        "More",
        "--item",
        "Help: xdg-open help.html",
        "--submenu-end",
    ])
    .unwrap();

    assert_eq!(cfg.toolkit(), Toolkit::Gtk);
    assert_eq!(
        cfg.menu().items(),
        [
            MenuItem::entry("Edit", "gedit"),
            MenuItem::Separator,
            MenuItem::submenu("More"),
            MenuItem::entry("Help", "xdg-open help.html"),
            MenuItem::SubmenuEnd,
        ]
    );
    assert_eq!(cfg.menu().open_scopes(), 0);
}

#[test]
fn parsing_is_repeatable() {
    let args = [
        "qt", "-d", "--icon", "tray.svg", "--item", "A: a", "--submenu", "S", "--item", "B: b",
    ];
    let first = parse(&args).unwrap();
    for _ in 0..3 {
        assert_eq!(parse(&args).unwrap(), first);
    }
}

#[test]
fn item_whitespace_is_trimmed() {
    let tight = parse(&["qt", "--item", "A: B"]).unwrap();
    let loose = parse(&["qt", "--item", "  A  :  B  "]).unwrap();
    assert_eq!(tight.menu(), loose.menu());
    assert_eq!(tight.menu().items(), [MenuItem::entry("A", "B")]);
}

#[test]
fn item_splits_on_first_colon() {
    let cfg = parse(&["qt", "--item", "A: B: C"]).unwrap();
    assert_eq!(cfg.menu().items(), [MenuItem::entry("A", "B: C")]);
}

#[test]
fn item_without_colon_is_rejected() {
    let err = parse(&["qt", "--item", "NoColonHere"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    insta::assert_snapshot!(err.to_string(), @"Menu entry 'NoColonHere' needs a ':' between label and command");
}

#[test]
fn lone_submenu_end_gives_empty_menu() {
    let cfg = parse(&["gtk", "--submenu-end"]).unwrap().validate().unwrap();
    assert!(cfg.menu().is_empty());
    assert_eq!(cfg.menu().open_scopes(), 0);
}

#[test]
fn no_directives_is_rejected() {
    let err = parse(&["gtk", "--debug"]).unwrap().validate().unwrap_err();
    assert!(matches!(err, Error::NoMenuItems));
    assert_eq!(err.kind(), ErrorKind::NoMenuItems);
}

#[test]
fn missing_toolkit_fails_first() {
    let err = parse(&["--debug"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    insta::assert_snapshot!(err.to_string(), @"First argument must be 'qt' or 'gtk' (got '--debug')");
}

#[test]
fn unknown_flag_is_named() {
    let err = parse(&["qt", "--item", "A: a", "--colour", "red"]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Bad command-line item '--colour'");
}

#[test]
fn flags_set_configuration() {
    let cfg = parse(&["gtk", "--debug", "--icon", "/tmp/x.png", "--stdin"]).unwrap();
    assert!(cfg.debug());
    assert!(cfg.read_from_stdin());
    assert_eq!(cfg.icon().and_then(|p| p.to_str()), Some("/tmp/x.png"));
    assert!(cfg.menu().is_empty());
}

#[test]
fn empty_labels_and_commands_are_kept() {
    let cfg = parse(&["qt", "--submenu", "", "--item", " : "]).unwrap();
    assert_eq!(
        cfg.menu().items(),
        [MenuItem::submenu(""), MenuItem::entry("", "")]
    );
}
