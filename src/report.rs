//! Report assembly: run every probe once, fold the results into
//! [`MetricSample`]s, and render the single status message.

use tracing::warn;

use crate::MetricSample;
use crate::config::Config;
use crate::indicator::{self, Indicator, temperature_symbol};
use crate::logtail::LogTail;
use crate::probes::{ProbeError, ProbeResult, cpu, disk, memory, net, system};
use crate::util::current_timestamp;

/// One status report: every probe result, collected once, rendered once.
///
/// Fields stay as raw probe results until [`render`](Self::render) so a
/// failure keeps its category (and stays individually testable) instead of
/// collapsing into a sentinel string at collection time.
pub struct StatusReport {
    pub display: String,
    pub timestamp: String,
    pub interface: String,
    pub ip: ProbeResult<String>,
    pub ssid: ProbeResult<String>,
    pub signal: ProbeResult<f64>,
    pub uptime: ProbeResult<String>,
    pub cpu_temperature: ProbeResult<f64>,
    pub disk_usage: ProbeResult<u8>,
    pub memory_usage: ProbeResult<f64>,
    pub cpu_usage: ProbeResult<f64>,
    pub processes: ProbeResult<usize>,
    pub traffic: ProbeResult<net::InterfaceTraffic>,
    pub load: ProbeResult<cpu::LoadAverage>,
    pub usb_devices: ProbeResult<String>,
    pub record_tail: LogTail,
    pub logins: ProbeResult<String>,
}

impl StatusReport {
    /// Run every probe exactly once, in the order the report renders them.
    ///
    /// Probes are independent; a failing probe degrades its own field only.
    pub fn collect(config: &Config) -> Self {
        Self {
            display: config.display_name(),
            timestamp: current_timestamp(),
            interface: config.interface.clone(),
            ip: net::ip_address(),
            ssid: net::wifi_ssid(),
            signal: net::wifi_signal(&config.interface),
            uptime: system::uptime(),
            cpu_temperature: cpu::temperature(&config.thermal_zone),
            disk_usage: disk::root_usage_percent(),
            memory_usage: memory::usage_percent(),
            cpu_usage: cpu::usage(),
            processes: system::active_processes(),
            traffic: net::interface_traffic(&config.interface),
            load: cpu::load_average(),
            usb_devices: system::usb_devices(),
            record_tail: LogTail::read(&config.record_file),
            logins: system::login_history(),
        }
    }

    /// Render the whole report as one text block, never partially.
    pub fn render(&self) -> String {
        let signal = numeric_field(&self.signal, "wifi signal")
            .as_numeric()
            .unwrap_or(0.0);
        let temperature = numeric_field(&self.cpu_temperature, "cpu temperature")
            .as_numeric()
            .unwrap_or(0.0);
        let disk = numeric_field(&self.disk_usage, "disk usage")
            .as_numeric()
            .unwrap_or(0.0);
        let memory = numeric_field(&self.memory_usage, "memory usage")
            .as_numeric()
            .unwrap_or(0.0);

        let disk_symbol = Indicator::classify(disk, indicator::DISK_USAGE).symbol();
        let memory_symbol = Indicator::classify(memory, indicator::MEMORY_USAGE).symbol();

        let cpu_usage = match numeric_field(&self.cpu_usage, "cpu usage") {
            MetricSample::Numeric(value) => format!(
                "{value:.2}% {}",
                Indicator::classify(value, indicator::CPU_USAGE).symbol()
            ),
            _ => String::from("0.00% ❓"),
        };

        let ip = match &self.ip {
            Ok(address) => address.clone(),
            Err(err @ ProbeError::Parse(_)) => {
                warn!("ip probe degraded: {err}");
                String::from("🌐 Unable to retrieve IP")
            }
            Err(err) => {
                warn!("ip probe degraded: {err}");
                String::from("🌐 Error getting IP")
            }
        };

        let traffic = match &self.traffic {
            Ok(traffic) => traffic.to_string(),
            Err(err @ ProbeError::Parse(_)) => {
                warn!("traffic probe degraded: {err}");
                format!("❓ No data for {}", self.interface)
            }
            Err(err) => {
                warn!("traffic probe degraded: {err}");
                String::from("❓ Error getting network traffic")
            }
        };

        let processes = match &self.processes {
            Ok(count) => count.to_string(),
            Err(err) => {
                warn!("process count probe degraded: {err}");
                String::from("❓ Error getting active processes")
            }
        };

        let load = match &self.load {
            Ok(load) => load.to_string(),
            Err(err) => {
                warn!("system load probe degraded: {err}");
                String::from("❓ Error getting system load")
            }
        };

        let ssid = text_or(&self.ssid, "wifi ssid", "📡 Error getting Wi-Fi SSID");
        let uptime = text_or(&self.uptime, "uptime", "⏳ Error getting uptime");
        let usb = text_or(&self.usb_devices, "usb devices", "❓ Error getting USB devices");
        let logins = text_or(&self.logins, "login history", "❓ Error getting login logs");

        format!(
            "📊 {display} Status:\n\
             \n\
             🕒 Time: {timestamp}\n\
             🌐 IP Address: {ip}\n\
             📡 Wi-Fi SSID: {ssid}\n\
             📶 Wi-Fi Signal Strength: {signal:.2}%\n\
             ⏳ Uptime: {uptime} ⏰\n\
             🔥 CPU Temperature: {temperature:.2}°C {temperature_flag}\n\
             💾 Disk Usage: {disk:.0}% {disk_symbol}\n\
             📈 Memory Usage: {memory:.2}% {memory_symbol}\n\
             ⚙️ CPU Usage: {cpu_usage}\n\
             🖥️ Active Processes: {processes}\n\
             🌐 Network Traffic: {traffic}\n\
             📊 System Load: {load}\n\
             🖴 USB Devices:\n{usb}\n\
             \n\
             📜 Last 5 Log Entries:\n{records}\n\
             \n\
             🔐 Last 5 Login Logs:\n{logins}",
            display = self.display,
            timestamp = self.timestamp,
            temperature_flag = temperature_symbol(temperature),
            records = self.record_tail.render(),
        )
    }
}

/// Fold a numeric probe result into a sample, logging the degradation.
fn numeric_field<T>(result: &ProbeResult<T>, field: &str) -> MetricSample
where
    T: Copy + Into<f64>,
{
    match result {
        Ok(value) => MetricSample::Numeric((*value).into()),
        Err(err) => {
            warn!("{field} probe degraded: {err}");
            MetricSample::Unavailable
        }
    }
}

/// Fold a text probe result into a sample, logging the degradation.
fn text_field(result: &ProbeResult<String>, field: &str) -> MetricSample {
    match result {
        Ok(value) => MetricSample::text(value),
        Err(err) => {
            warn!("{field} probe degraded: {err}");
            MetricSample::Unavailable
        }
    }
}

fn text_or(result: &ProbeResult<String>, field: &str, placeholder: &str) -> String {
    match text_field(result, field) {
        MetricSample::Text(value) => value,
        _ => placeholder.to_string(),
    }
}
