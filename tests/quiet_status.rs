use log::{Level, LevelFilter, Log, Metadata, Record};
use mockito::Server;
use reqwest::blocking::Client;
use std::sync::Mutex;
use todo_fetch::transport::HttpTransport;
use todo_fetch::Fetcher;

struct Recorder {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_non_200_status_logs_nothing_above_debug() {
    log::set_logger(&RECORDER).expect("Failed to install logger");
    log::set_max_level(LevelFilter::Trace);

    let mut server = Server::new();
    let mock = server
        .mock("GET", "/todos/1")
        .with_status(404)
        .with_body("{}")
        .expect(1)
        .create();

    let client = Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    let fetcher = Fetcher::with_url(
        HttpTransport::with_client(client),
        format!("{}/todos/1", server.url()),
    );

    let mut out = Vec::new();
    fetcher.run(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Ошибка: 404\n");
    mock.assert();

    let records = RECORDER.records.lock().unwrap();
    let ours: Vec<_> = records
        .iter()
        .filter(|(_, target, _)| target.starts_with("todo_fetch"))
        .collect();

    // The status is still visible with RUST_LOG=debug
    assert!(ours
        .iter()
        .any(|(level, _, message)| *level == Level::Debug && message.contains("404")));
    // A handled non-200 run stays quiet under the default `warn` filter
    assert!(ours.iter().all(|(level, _, _)| *level > Level::Warn));
}
