use super::*;

const THREE_SECONDS: NotifyOptions = NotifyOptions { duration: Duration::from_secs(3) };

#[test]
fn render_notice_prefixes_kind() {
    assert_eq!(render_notice(NoticeKind::Success, "Login Successful!"), "[ok] Login Successful!");
    assert_eq!(render_notice(NoticeKind::Error, "Login Failed!"), "[error] Login Failed!");
}

#[test]
fn console_surface_remembers_last_location() {
    let surface = ConsoleSurface::new();
    assert_eq!(surface.location(), None);
    surface.navigate("/login", NavigateOptions::default());
    surface.navigate("/ProductList", NavigateOptions { replace: true });
    assert_eq!(surface.location().as_deref(), Some("/ProductList"));
}

#[test]
fn recording_surface_keeps_call_order() {
    let surface = RecordingSurface::new();
    surface.notify(NoticeKind::Error, "first", THREE_SECONDS);
    surface.notify(NoticeKind::Success, "second", THREE_SECONDS);
    surface.navigate("/ProductList", NavigateOptions { replace: true });

    let notices = surface.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].message, "first");
    assert_eq!(notices[1].kind, NoticeKind::Success);
    assert_eq!(notices[1].options, THREE_SECONDS);
    assert_eq!(
        surface.navigations(),
        vec![RecordedNavigation { destination: "/ProductList".to_owned(), options: NavigateOptions { replace: true } }]
    );
}
