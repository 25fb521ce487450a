use crate::{
    content_source::{self, ContentSource, WindowContent},
    platform::HostPlatform,
    shell_config::ShellConfig,
    shell_host::ShellHost,
    window_registry::WindowRegistry,
    WindowHandle, WindowSpec, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
    MAIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllWindowsClosedDecision {
    Quit,
    StayResident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReactivateDecision {
    Recreate,
    AlreadyOpen,
}

pub(crate) fn decide_all_windows_closed(platform: HostPlatform) -> AllWindowsClosedDecision {
    if platform.persists_without_windows() {
        AllWindowsClosedDecision::StayResident
    } else {
        AllWindowsClosedDecision::Quit
    }
}

pub(crate) fn decide_reactivate(open_windows: usize) -> ReactivateDecision {
    if open_windows == 0 {
        ReactivateDecision::Recreate
    } else {
        ReactivateDecision::AlreadyOpen
    }
}

pub(crate) struct ShellController<H> {
    host: H,
    config: ShellConfig,
    registry: WindowRegistry,
    bridge_script: String,
}

impl<H: ShellHost> ShellController<H> {
    pub(crate) fn new(host: H, config: ShellConfig, bridge_script: String) -> Self {
        Self {
            host,
            config,
            registry: WindowRegistry::default(),
            bridge_script,
        }
    }

    pub(crate) fn open_window_count(&self) -> usize {
        self.registry.len()
    }

    fn main_window_spec(&self) -> WindowSpec {
        WindowSpec {
            label: MAIN_WINDOW_LABEL.to_string(),
            title: MAIN_WINDOW_TITLE.to_string(),
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            initialization_script: self.bridge_script.clone(),
        }
    }

    /// Creates the main window pointed at its content. Load failures are logged, never returned.
    pub(crate) fn startup<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        let spec = self.main_window_spec();
        if self.registry.get(&spec.label).is_some() {
            log(&format!("window {} is already open, skipping startup", spec.label));
            return;
        }

        let source = content_source::select_content_source(&self.config);
        let content = self.resolve_window_content(&source, &log);
        if let Err(error) = self.host.create_window(&spec, &content) {
            log(&format!("failed to create main window: {error}"));
            return;
        }
        self.registry.insert(WindowHandle::from(&spec));
        log(&format!(
            "main window created ({}x{}) for {}",
            spec.width,
            spec.height,
            source.describe()
        ));

        if source.opens_devtools() {
            self.host.open_devtools(&spec.label);
        }
    }

    fn resolve_window_content<F>(&self, source: &ContentSource, log: F) -> WindowContent
    where
        F: Fn(&str),
    {
        match source {
            ContentSource::Packaged(entry) => {
                match content_source::verify_packaged_entry(entry, |path| {
                    self.host.packaged_asset_exists(path)
                }) {
                    Ok(()) => WindowContent::PackagedAsset(entry.clone()),
                    Err(error) => {
                        log(&format!("failed to load packaged content: {error}"));
                        WindowContent::Blank
                    }
                }
            }
            ContentSource::DevServer(url) => WindowContent::External(url.clone()),
        }
    }

    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn handle_reactivate<F>(&mut self, log: F) -> ReactivateDecision
    where
        F: Fn(&str),
    {
        let decision = decide_reactivate(self.registry.len());
        if decision == ReactivateDecision::Recreate {
            log("reactivated with no open windows, recreating main window");
            self.startup(log);
        }
        decision
    }

    pub(crate) fn handle_all_windows_closed<F>(&mut self, log: F) -> AllWindowsClosedDecision
    where
        F: Fn(&str),
    {
        let decision = decide_all_windows_closed(self.config.platform);
        match decision {
            AllWindowsClosedDecision::Quit => {
                log("all windows closed, exiting desktop process");
                self.host.quit();
            }
            AllWindowsClosedDecision::StayResident => {
                log(&format!(
                    "all windows closed, staying resident on {}",
                    self.config.platform.as_str()
                ));
            }
        }
        decision
    }

    pub(crate) fn window_destroyed(&mut self, label: &str) -> Option<WindowHandle> {
        self.registry.remove(label)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use url::Url;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        CreateWindow(WindowSpec, WindowContent),
        OpenDevtools(String),
        Quit,
    }

    #[derive(Default)]
    struct FakeHost {
        calls: RefCell<Vec<HostCall>>,
        assets: Vec<&'static str>,
        fail_create: bool,
    }

    impl FakeHost {
        fn with_assets(assets: &[&'static str]) -> Self {
            Self {
                assets: assets.to_vec(),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<HostCall> {
            self.calls.borrow().clone()
        }

        fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
            self.calls.borrow().iter().filter(|call| predicate(call)).count()
        }

        fn created(&self) -> Vec<(WindowSpec, WindowContent)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    HostCall::CreateWindow(spec, content) => Some((spec, content)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ShellHost for &FakeHost {
        fn packaged_asset_exists(&self, path: &str) -> bool {
            self.assets.iter().any(|asset| *asset == path)
        }

        fn create_window(&self, spec: &WindowSpec, content: &WindowContent) -> Result<(), String> {
            if self.fail_create {
                return Err("window backend unavailable".to_string());
            }
            self.calls
                .borrow_mut()
                .push(HostCall::CreateWindow(spec.clone(), content.clone()));
            Ok(())
        }

        fn open_devtools(&self, label: &str) {
            self.calls
                .borrow_mut()
                .push(HostCall::OpenDevtools(label.to_string()));
        }

        fn quit(&self) {
            self.calls.borrow_mut().push(HostCall::Quit);
        }
    }

    fn dev_url() -> Url {
        Url::parse("http://localhost:5173").expect("valid url")
    }

    fn config(packaged: bool, platform: HostPlatform) -> ShellConfig {
        ShellConfig {
            packaged,
            dev_server_url: dev_url(),
            packaged_entry: "index.html".to_string(),
            platform,
        }
    }

    fn controller(host: &FakeHost, config: ShellConfig) -> ShellController<&FakeHost> {
        ShellController::new(host, config, "/* bridge */".to_string())
    }

    fn is_create(call: &HostCall) -> bool {
        matches!(call, HostCall::CreateWindow(..))
    }

    fn collect_logs(shell: &mut ShellController<&FakeHost>) -> Vec<String> {
        let logs = RefCell::new(Vec::new());
        shell.startup(|line| logs.borrow_mut().push(line.to_string()));
        logs.into_inner()
    }

    #[test]
    fn startup_creates_exactly_one_800_by_600_window() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::Linux));

        shell.startup(|_| {});

        let created = host.created();
        assert_eq!(created.len(), 1);
        let (spec, _) = &created[0];
        assert_eq!(spec.label, "main");
        assert_eq!(spec.width, 800.0);
        assert_eq!(spec.height, 600.0);
        assert_eq!(spec.initialization_script, "/* bridge */");
        assert_eq!(shell.open_window_count(), 1);
    }

    #[test]
    fn repeated_startup_does_not_duplicate_main_window() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::Linux));

        shell.startup(|_| {});
        let logs = collect_logs(&mut shell);

        assert_eq!(host.count(is_create), 1);
        assert_eq!(shell.open_window_count(), 1);
        assert_eq!(logs, ["window main is already open, skipping startup"]);
    }

    #[test]
    fn dev_mode_loads_endpoint_and_opens_devtools() {
        let host = FakeHost::with_assets(&["index.html"]);
        let mut shell = controller(&host, config(false, HostPlatform::Linux));

        shell.startup(|_| {});

        let calls = host.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            &calls[0],
            HostCall::CreateWindow(_, WindowContent::External(url)) if *url == dev_url()
        ));
        assert_eq!(calls[1], HostCall::OpenDevtools("main".to_string()));
    }

    #[test]
    fn packaged_mode_loads_embedded_entry_without_devtools() {
        let host = FakeHost::with_assets(&["index.html"]);
        let mut shell = controller(&host, config(true, HostPlatform::Linux));

        let logs = collect_logs(&mut shell);

        let created = host.created();
        assert_eq!(created.len(), 1);
        assert_eq!(
            created[0].1,
            WindowContent::PackagedAsset("index.html".to_string())
        );
        assert_eq!(host.count(|call| matches!(call, HostCall::OpenDevtools(_))), 0);
        assert!(logs.iter().all(|line| !line.starts_with("failed")));
    }

    #[test]
    fn missing_packaged_entry_logs_one_error_and_opens_blank_window() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(true, HostPlatform::Linux));

        let logs = collect_logs(&mut shell);

        let errors: Vec<&String> = logs
            .iter()
            .filter(|line| line.starts_with("failed"))
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Packaged entry is missing from the bundle: index.html"));
        assert_eq!(host.created()[0].1, WindowContent::Blank);
        assert_eq!(shell.open_window_count(), 1);
        assert_eq!(host.count(is_create), 1);
    }

    #[test]
    fn window_creation_failure_is_logged_and_not_registered() {
        let host = FakeHost {
            fail_create: true,
            ..FakeHost::default()
        };
        let mut shell = controller(&host, config(false, HostPlatform::Linux));

        let logs = collect_logs(&mut shell);

        assert_eq!(shell.open_window_count(), 0);
        assert!(host.calls().is_empty());
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("window backend unavailable"));
    }

    #[test]
    fn all_windows_closed_quits_once_on_non_persistent_platform() {
        for platform in [HostPlatform::Linux, HostPlatform::Windows, HostPlatform::Other] {
            let host = FakeHost::default();
            let mut shell = controller(&host, config(false, platform));

            let decision = shell.handle_all_windows_closed(|_| {});

            assert_eq!(decision, AllWindowsClosedDecision::Quit);
            assert_eq!(host.count(|call| *call == HostCall::Quit), 1);
        }
    }

    #[test]
    fn all_windows_closed_stays_resident_on_macos() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::MacOs));

        let decision = shell.handle_all_windows_closed(|_| {});

        assert_eq!(decision, AllWindowsClosedDecision::StayResident);
        assert_eq!(host.count(|call| *call == HostCall::Quit), 0);
    }

    #[test]
    fn reactivate_with_zero_windows_runs_startup_again() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::MacOs));
        shell.startup(|_| {});
        assert!(shell.window_destroyed("main").is_some());

        let decision = shell.handle_reactivate(|_| {});

        assert_eq!(decision, ReactivateDecision::Recreate);
        assert_eq!(host.count(is_create), 2);
        assert_eq!(shell.open_window_count(), 1);
    }

    #[test]
    fn reactivate_with_open_window_does_nothing() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::MacOs));
        shell.startup(|_| {});

        let decision = shell.handle_reactivate(|_| {});

        assert_eq!(decision, ReactivateDecision::AlreadyOpen);
        assert_eq!(host.count(is_create), 1);
    }

    #[test]
    fn window_destroyed_ignores_unknown_labels() {
        let host = FakeHost::default();
        let mut shell = controller(&host, config(false, HostPlatform::Linux));
        shell.startup(|_| {});

        assert!(shell.window_destroyed("devtools").is_none());
        assert_eq!(shell.open_window_count(), 1);
    }

    #[test]
    fn decide_reactivate_only_recreates_when_empty() {
        assert_eq!(decide_reactivate(0), ReactivateDecision::Recreate);
        assert_eq!(decide_reactivate(1), ReactivateDecision::AlreadyOpen);
        assert_eq!(decide_reactivate(3), ReactivateDecision::AlreadyOpen);
    }
}
