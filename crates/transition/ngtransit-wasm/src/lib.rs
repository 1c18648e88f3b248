use js_sys::{Function, Reflect};
use log::warn;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use ngtransit_core::{
    presets, ClipboardError, ClipboardSink, Config, FrameHandle, FrameHost, RenderStyle, Session,
    TimerHandle, TriggerMode, EASINGS, IMPORT_LINE,
};

/// Simulator session bound to a JS host.
///
/// The host object must provide `now()`, `requestFrame()`, `cancelFrame(id)`,
/// `setTimeout(ms)`, `clearTimeout(id)` and `flushLayout(style)`. Frame and timer
/// callbacks are delivered back through `on_frame(id)` / `on_timer(id)`; they must
/// be scheduled, never invoked synchronously from inside `requestFrame`/`setTimeout`.
#[wasm_bindgen]
pub struct NgTransit {
    core: Session,
    host: JsFrameHost,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn host_fn(host: &JsValue, name: &str) -> Result<Function, JsError> {
    Reflect::get(host, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| JsError::new(&format!("host error: missing function '{name}'")))
}

/// Browser ids are plain non-negative numbers.
fn handle_id(v: &JsValue) -> Option<u32> {
    v.as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

struct JsFrameHost {
    this: JsValue,
    now: Function,
    request_frame: Function,
    cancel_frame: Function,
    set_timeout: Function,
    clear_timeout: Function,
    flush_layout: Function,
    /// Set when a scheduling call threw or returned no usable id.
    failed: bool,
}

impl JsFrameHost {
    fn from_js(host: JsValue) -> Result<Self, JsError> {
        if jsvalue_is_undefined_or_null(&host) {
            return Err(JsError::new("host error: host object is null/undefined"));
        }
        Ok(Self {
            now: host_fn(&host, "now")?,
            request_frame: host_fn(&host, "requestFrame")?,
            cancel_frame: host_fn(&host, "cancelFrame")?,
            set_timeout: host_fn(&host, "setTimeout")?,
            clear_timeout: host_fn(&host, "clearTimeout")?,
            flush_layout: host_fn(&host, "flushLayout")?,
            this: host,
            failed: false,
        })
    }

    fn take_failure(&mut self) -> bool {
        std::mem::take(&mut self.failed)
    }
}

impl FrameHost for JsFrameHost {
    fn now_ms(&self) -> f64 {
        match self.now.call0(&self.this) {
            Ok(v) => v.as_f64().unwrap_or(0.0),
            Err(e) => {
                warn!("host now() threw: {e:?}");
                0.0
            }
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        match self.request_frame.call0(&self.this) {
            Ok(v) => match handle_id(&v) {
                Some(id) => FrameHandle(id),
                None => {
                    warn!("host requestFrame() returned {v:?}, not an id");
                    self.failed = true;
                    FrameHandle(0)
                }
            },
            Err(e) => {
                warn!("host requestFrame() threw: {e:?}");
                self.failed = true;
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self
            .cancel_frame
            .call1(&self.this, &JsValue::from(handle.0))
        {
            warn!("host cancelFrame({}) threw: {e:?}", handle.0);
        }
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        match self.set_timeout.call1(&self.this, &JsValue::from(delay_ms)) {
            Ok(v) => match handle_id(&v) {
                Some(id) => TimerHandle(id),
                None => {
                    warn!("host setTimeout({delay_ms}) returned {v:?}, not an id");
                    self.failed = true;
                    TimerHandle(0)
                }
            },
            Err(e) => {
                warn!("host setTimeout({delay_ms}) threw: {e:?}");
                self.failed = true;
                TimerHandle(0)
            }
        }
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if let Err(e) = self
            .clear_timeout
            .call1(&self.this, &JsValue::from(handle.0))
        {
            warn!("host clearTimeout({}) threw: {e:?}", handle.0);
        }
    }

    fn flush_layout(&mut self, style: &RenderStyle) {
        let arg = match swb::to_value(style) {
            Ok(v) => v,
            Err(e) => {
                warn!("render style conversion failed: {e}");
                return;
            }
        };
        if let Err(e) = self.flush_layout.call1(&self.this, &arg) {
            warn!("host flushLayout() threw: {e:?}");
        }
    }
}

/// Clipboard backed by a JS `writeText(text)` callback. A throw counts as a
/// failed write; promise-returning writers should use `mark_copied` on resolve.
struct JsClipboard {
    f: Function,
}

impl ClipboardSink for JsClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.f
            .call1(&JsValue::UNDEFINED, &JsValue::from_str(text))
            .map(|_| ())
            .map_err(|e| ClipboardError::new(format!("{e:?}")))
    }
}

#[wasm_bindgen]
impl NgTransit {
    /// Create a session. `config` is an optional JSON object matching `Config`
    /// (undefined/null for defaults); `host` is the scheduling host described above.
    /// Example:
    ///   new NgTransit({ limits: { x: { min: -100, max: 100 } } }, host)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, host: JsValue) -> Result<NgTransit, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate().map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(NgTransit {
            core: Session::new(cfg),
            host: JsFrameHost::from_js(host)?,
        })
    }

    // ----- playback -----

    /// Start a run. Returns false while a run is already in progress, or when the
    /// host failed to schedule its frame (the run is then torn down at once).
    #[wasm_bindgen]
    pub fn play(&mut self) -> bool {
        let started = self.core.play(&mut self.host);
        !self.abort_on_host_failure() && started
    }

    #[wasm_bindgen(js_name = on_frame)]
    pub fn on_frame(&mut self, id: u32) {
        self.core.on_frame(FrameHandle(id), &mut self.host);
        self.abort_on_host_failure();
    }

    #[wasm_bindgen(js_name = on_timer)]
    pub fn on_timer(&mut self, id: u32) {
        self.core.on_timer(TimerHandle(id), &mut self.host);
        self.abort_on_host_failure();
    }

    /// Cancel any pending frame or timer. Call when the preview unmounts.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.core.teardown(&mut self.host);
    }

    // ----- editors -----

    #[wasm_bindgen(js_name = set_from_field)]
    pub fn set_from_field(&mut self, key: String, value: f64) -> Result<(), JsError> {
        self.core
            .set_from_field(&key, value)
            .map_err(|e| JsError::new(&format!("set_from_field error: {e}")))
    }

    #[wasm_bindgen(js_name = set_to_field)]
    pub fn set_to_field(&mut self, key: String, value: f64) -> Result<(), JsError> {
        self.core
            .set_to_field(&key, value)
            .map_err(|e| JsError::new(&format!("set_to_field error: {e}")))
    }

    /// Apply a built-in preset by display name.
    #[wasm_bindgen(js_name = apply_preset)]
    pub fn apply_preset(&mut self, name: String) -> Result<(), JsError> {
        self.core
            .apply_preset_named(&name)
            .map_err(|e| JsError::new(&format!("apply_preset error: {e}")))?;
        self.sync_player();
        Ok(())
    }

    #[wasm_bindgen(js_name = set_duration)]
    pub fn set_duration(&mut self, ms: f64) {
        self.core.set_duration(ms);
        self.sync_player();
    }

    #[wasm_bindgen(js_name = set_delay)]
    pub fn set_delay(&mut self, ms: f64) {
        self.core.set_delay(ms);
        self.sync_player();
    }

    #[wasm_bindgen(js_name = set_easing)]
    pub fn set_easing(&mut self, easing: String) {
        self.core.set_easing(easing);
    }

    /// `"enter_leave"` or `"state_toggle"`.
    #[wasm_bindgen(js_name = set_mode)]
    pub fn set_mode(&mut self, mode: JsValue) -> Result<(), JsError> {
        let mode: TriggerMode =
            swb::from_value(mode).map_err(|e| JsError::new(&format!("mode error: {e}")))?;
        self.core.set_mode(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_trigger_name)]
    pub fn set_trigger_name(&mut self, name: String) {
        self.core.set_trigger_name(name);
    }

    // ----- views -----

    /// Generated trigger definition.
    #[wasm_bindgen]
    pub fn code(&self) -> String {
        self.core.code()
    }

    #[wasm_bindgen]
    pub fn usage(&self) -> String {
        self.core.usage()
    }

    /// Everything needed to render the simulator, as a plain JS object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        let now = self.host.now_ms();
        swb::to_value(&self.core.snapshot(now))
            .map_err(|e| JsError::new(&format!("snapshot error: {e}")))
    }

    /// Write the generated code through `write_text(text)`. Returns whether the
    /// copied indicator was switched on; failures are swallowed.
    #[wasm_bindgen(js_name = copy_code)]
    pub fn copy_code(&mut self, write_text: Function) -> bool {
        let now = self.host.now_ms();
        let mut sink = JsClipboard { f: write_text };
        self.core.copy_code(&mut sink, now)
    }

    #[wasm_bindgen(js_name = mark_copied)]
    pub fn mark_copied(&mut self) {
        let now = self.host.now_ms();
        self.core.mark_copied(now);
    }
}

impl NgTransit {
    fn sync_player(&mut self) {
        self.core.sync_player(&mut self.host);
        self.abort_on_host_failure();
    }

    /// Drop the run when the host could not schedule its callbacks; otherwise the
    /// player would wait forever for a frame or timer that never arrives.
    fn abort_on_host_failure(&mut self) -> bool {
        if !self.host.take_failure() {
            return false;
        }
        warn!("host scheduling failed; stopping the current run");
        self.core.teardown(&mut self.host);
        true
    }
}

/// Preset catalog in display order.
#[wasm_bindgen(js_name = preset_list)]
pub fn preset_list() -> Result<JsValue, JsError> {
    swb::to_value(presets()).map_err(|e| JsError::new(&format!("presets error: {e}")))
}

/// Easing picker options in display order.
#[wasm_bindgen(js_name = easing_list)]
pub fn easing_list() -> Result<JsValue, JsError> {
    swb::to_value(&EASINGS).map_err(|e| JsError::new(&format!("easings error: {e}")))
}

#[wasm_bindgen(js_name = import_line)]
pub fn import_line() -> String {
    IMPORT_LINE.to_string()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
