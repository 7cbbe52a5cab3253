//! Browser tests for the shipped script: scroll flags, mobile menu, client-side
//! navigation and the contact bridge.
//!
//! Each test starts its own preview server. Run with:
//! `cargo test --test browser_ui -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, OnceLock};
use std::thread::sleep;
use std::time::Duration;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

struct Server {
    child: Child,
    port: u16,
    _config_dir: TempDir,
}

impl Server {
    fn start(port: u16) -> Self {
        Self::start_with_config(port, "")
    }

    fn start_with_config(port: u16, config: &str) -> Self {
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("site.toml");
        std::fs::write(&config_path, config).unwrap();
        let child = Command::new(env!("CARGO_BIN_EXE_clinic-site"))
            .arg("--config")
            .arg(&config_path)
            .args(["serve", "--port", &port.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to start clinic-site serve");
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return Self {
                    child,
                    port,
                    _config_dir: config_dir,
                };
            }
            sleep(Duration::from_millis(50));
        }
        panic!("server did not come up on port {port}");
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Phone-sized window so the mobile menu toggle is visible.
fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((400, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn open(server: &Server, path: &str) -> Arc<Tab> {
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&server.url(path))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn eval_string(tab: &Tab, js: &str) -> String {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn wait_for(tab: &Tab, js: &str) -> bool {
    for _ in 0..50 {
        if eval_bool(tab, js) {
            return true;
        }
        sleep(Duration::from_millis(100));
    }
    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn menu_closes_after_navigation() {
    let server = Server::start(47811);
    let tab = open(&server, "/");

    eval_bool(&tab, "document.querySelector('[data-menu-toggle]').click(), true");
    assert!(eval_bool(&tab, "!document.getElementById('mobile-menu').hidden"));

    eval_bool(
        &tab,
        "document.querySelector('#mobile-menu a[href=\"/servicos\"]').click(), true",
    );
    assert!(wait_for(&tab, "location.pathname === '/servicos'"));
    assert!(wait_for(&tab, "document.title.startsWith('Nossos Tratamentos')"));
    assert!(eval_bool(&tab, "document.getElementById('mobile-menu').hidden"));
    assert_eq!(
        eval_string(
            &tab,
            "document.querySelector('[data-menu-toggle]').getAttribute('aria-expanded')"
        ),
        "false"
    );
}

#[test]
#[ignore]
fn navigation_resets_scroll_and_swaps_main() {
    let server = Server::start(47812);
    let tab = open(&server, "/");

    eval_bool(&tab, "window.scrollTo(0, 2000), true");
    assert!(wait_for(&tab, "window.scrollY > 0"));
    eval_bool(
        &tab,
        "document.querySelector('.keyword-links a[href=\"/local/cidade/Colombo\"]').click(), true",
    );
    assert!(wait_for(&tab, "document.title.includes('Colombo')"));
    assert!(wait_for(&tab, "window.scrollY === 0"));
    assert!(eval_bool(&tab, "document.querySelector('main h1').textContent.includes('Colombo')"));
}

#[test]
#[ignore]
fn back_to_top_appears_after_scroll() {
    let server = Server::start(47813);
    let tab = open(&server, "/");

    assert!(eval_bool(&tab, "document.querySelector('[data-back-to-top]').hidden"));
    eval_bool(&tab, "window.scrollTo(0, 1000), true");
    assert!(wait_for(&tab, "!document.querySelector('[data-back-to-top]').hidden"));
    assert!(eval_bool(
        &tab,
        "document.querySelector('[data-site-header]').classList.contains('scrolled')"
    ));

    eval_bool(&tab, "window.scrollTo(0, 0), true");
    assert!(wait_for(&tab, "document.querySelector('[data-back-to-top]').hidden"));
}

#[test]
#[ignore]
fn contact_form_opens_prefilled_link() {
    let server = Server::start(47814);
    let tab = open(&server, "/contato");

    let opened = eval_string(
        &tab,
        r#"(function () {
            let target = '';
            window.open = function (url) { target = url; };
            const form = document.querySelector('[data-contact-form]');
            form.querySelector('[name=name]').value = 'Maria';
            form.querySelector('[name=phone]').value = '41999999999';
            form.querySelector('[name=service]').value = 'Ozonioterapia Medicinal';
            form.querySelector('[name=message]').value = 'Quero agendar';
            form.requestSubmit();
            return target;
        })()"#,
    );

    assert!(opened.starts_with("https://wa.me/5541999163976?text="), "opened {opened}");
    let text = eval_string(
        &tab,
        &format!("decodeURIComponent({:?}.split('text=')[1])", opened),
    );
    for value in ["Maria", "41999999999", "Ozonioterapia Medicinal", "Quero agendar"] {
        assert!(text.contains(value), "missing {value} in {text}");
    }
}

#[test]
#[ignore]
fn anchor_jump_keeps_form_values() {
    let server = Server::start_with_config(47815, "[routing]\nstyle = \"anchor\"\n");
    let tab = open(&server, "/");

    eval_bool(
        &tab,
        "document.querySelector('[data-contact-form] [name=name]').value = 'Maria', true",
    );
    eval_bool(&tab, "document.querySelector('a[href=\"/#sobre\"]').click(), true");
    assert!(wait_for(&tab, "location.hash === '#sobre'"));
    // Give a stray fetch time to land before checking
    sleep(Duration::from_millis(500));
    assert_eq!(
        eval_string(&tab, "document.querySelector('[data-contact-form] [name=name]').value"),
        "Maria"
    );
}

#[test]
#[ignore]
fn slow_response_does_not_override_newer_navigation() {
    let server = Server::start(47816);
    let tab = open(&server, "/");

    eval_bool(
        &tab,
        r#"(function () {
            const fetchPage = window.fetch;
            window.fetch = function (url, options) {
                const slow = String(url).endsWith('/servicos');
                return fetchPage(url, options).then(function (response) {
                    if (!slow) return response;
                    return new Promise(function (resolve) {
                        setTimeout(function () { resolve(response); }, 1000);
                    });
                });
            };
            document.querySelector('a[href="/servicos"]').click();
            document.querySelector('a[href="/sobre"]').click();
            return true;
        })()"#,
    );

    assert!(wait_for(&tab, "location.pathname === '/sobre'"));
    sleep(Duration::from_millis(1500));
    assert_eq!(eval_string(&tab, "location.pathname"), "/sobre");
    assert!(eval_bool(&tab, "document.title.startsWith('Sobre a Clínica')"));
}
