use tokio::sync::mpsc;
use crate::loggers::core::LogRecord;

/// Drains the log channel and emits one JSON line per record to stdout.
pub struct LogWorker {
    receiver: mpsc::Receiver<LogRecord>,
}

impl LogWorker {
    pub fn new(receiver: mpsc::Receiver<LogRecord>) -> Self {
        Self { receiver }
    }

    pub async fn run(mut self) {
        while let Some(record) = self.receiver.recv().await {
            if let Ok(json) = serde_json::to_string(&record) {
                println!("{}", json);
            }
        }
    }
}
