use crate::context::Context;
use crate::log::{LogLevel, Logger};
use anyhow::{anyhow, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// 标准输出
    Stdout,
    /// 标准错误
    #[default]
    Stderr,
    /// 追加写入文件，路径由 `file_path` 指定
    File,
}

/// WriterLogger 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct WriterLoggerConfig {
    /// 输出目标
    pub target: Target,

    /// 文件路径，仅 `target` 为 `file` 时使用
    pub file_path: Option<String>,

    /// 是否在行首输出级别标签
    #[default = true]
    pub print_level: bool,

    /// 是否输出 DEBUG 日志
    #[default = false]
    pub debug: bool,
}

/// 按行写入任意 `Write` 的 logger
///
/// 每条日志格式为 `LEVEL: text\n`（关闭 `print_level` 时为 `text\n`），
/// 整行一次性写入并 flush，多线程共享时行与行之间不会交错。写入失败直接忽略。
pub struct WriterLogger {
    writer: Mutex<Box<dyn Write + Send>>,
    print_level: bool,
    debug: bool,
}

impl WriterLogger {
    pub fn new(writer: impl Write + Send + 'static, print_level: bool, debug: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            print_level,
            debug,
        }
    }

    /// 输出到标准输出，始终带级别标签
    pub fn stdout(debug: bool) -> Self {
        Self::new(io::stdout(), true, debug)
    }

    /// 输出到标准错误，始终带级别标签
    pub fn stderr(debug: bool) -> Self {
        Self::new(io::stderr(), true, debug)
    }

    /// 以追加方式打开文件，父目录不存在时自动创建
    pub fn file(path: impl AsRef<Path>, print_level: bool, debug: bool) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("failed to open log file '{}': {}", path.display(), e))?;

        Ok(Self::new(file, print_level, debug))
    }

    /// 从配置创建
    pub fn from_config(config: WriterLoggerConfig) -> Result<Self> {
        match config.target {
            Target::Stdout => Ok(Self::new(io::stdout(), config.print_level, config.debug)),
            Target::Stderr => Ok(Self::new(io::stderr(), config.print_level, config.debug)),
            Target::File => {
                let path = config
                    .file_path
                    .ok_or_else(|| anyhow!("file_path is required when target is 'file'"))?;
                Self::file(path, config.print_level, config.debug)
            }
        }
    }

    pub fn print_level(&self) -> bool {
        self.print_level
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    fn println(&self, level: LogLevel, text: &str) {
        let line = if self.print_level {
            format!("{}: {}\n", level, text)
        } else {
            format!("{}\n", text)
        };

        // 其他线程写入时 panic 不影响后续日志
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

impl TryFrom<WriterLoggerConfig> for WriterLogger {
    type Error = anyhow::Error;

    fn try_from(config: WriterLoggerConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl Logger for WriterLogger {
    fn debug(&self, _ctx: &Context, msg: &str) {
        if !self.debug {
            return;
        }
        self.println(LogLevel::Debug, msg);
    }

    fn info(&self, _ctx: &Context, msg: &str) {
        self.println(LogLevel::Info, msg);
    }

    fn warn(&self, _ctx: &Context, err: &dyn Error) {
        self.println(LogLevel::Warn, &err.to_string());
    }

    fn error(&self, _ctx: &Context, err: &dyn Error) {
        self.println(LogLevel::Error, &err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// 可在测试中读取内容的共享缓冲区
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// 总是失败的输出
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }
    }

    fn io_error(msg: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, msg.to_string())
    }

    #[test]
    fn test_writer_logger_debug() {
        let cases = [
            (true, true, vec!["DEBUG: debug log"]),
            (false, false, vec![]),
            (true, false, vec![]),
            (false, true, vec!["debug log"]),
        ];

        for (print_level, debug, expected) in cases {
            let buf = SharedBuffer::default();
            let logger = WriterLogger::new(buf.clone(), print_level, debug);
            logger.debug(&Context::background(), "debug log");
            assert_eq!(
                buf.lines(),
                expected,
                "print_level: {} | debug: {}",
                print_level,
                debug
            );
        }
    }

    #[test]
    fn test_writer_logger_info() {
        for (print_level, expected) in [(true, "INFO: info log"), (false, "info log")] {
            let buf = SharedBuffer::default();
            let logger = WriterLogger::new(buf.clone(), print_level, false);
            logger.info(&Context::background(), "info log");
            assert_eq!(buf.lines(), vec![expected]);
        }
    }

    #[test]
    fn test_writer_logger_warn() {
        for (print_level, expected) in [(true, "WARN: warning log"), (false, "warning log")] {
            let buf = SharedBuffer::default();
            let logger = WriterLogger::new(buf.clone(), print_level, false);
            logger.warn(&Context::background(), &io_error("warning log"));
            assert_eq!(buf.lines(), vec![expected]);
        }
    }

    #[test]
    fn test_writer_logger_error() {
        for (print_level, expected) in [(true, "ERROR: error log"), (false, "error log")] {
            let buf = SharedBuffer::default();
            let logger = WriterLogger::new(buf.clone(), print_level, false);
            logger.error(&Context::background(), &io_error("error log"));
            assert_eq!(buf.lines(), vec![expected]);
        }
    }

    #[test]
    fn test_writer_logger_formatted() {
        let buf = SharedBuffer::default();
        let logger = WriterLogger::new(buf.clone(), true, false);
        logger.warnf(&Context::background(), format_args!("disk {}% full", 91));
        logger.errorf(&Context::background(), format_args!("{} failed", "upload"));
        assert_eq!(buf.lines(), vec!["WARN: disk 91% full", "ERROR: upload failed"]);
    }

    #[test]
    fn test_writer_logger_keeps_call_order() {
        let buf = SharedBuffer::default();
        let logger = WriterLogger::new(buf.clone(), true, true);
        let ctx = Context::background();
        logger.debug(&ctx, "1");
        logger.info(&ctx, "2");
        logger.warn(&ctx, &io_error("3"));
        logger.error(&ctx, &io_error("4"));
        assert_eq!(buf.lines(), vec!["DEBUG: 1", "INFO: 2", "WARN: 3", "ERROR: 4"]);
    }

    #[test]
    fn test_writer_logger_swallows_write_errors() {
        let logger = WriterLogger::new(BrokenWriter, true, true);
        let ctx = Context::background();
        logger.debug(&ctx, "debug");
        logger.info(&ctx, "info");
        logger.warn(&ctx, &io_error("warn"));
        logger.error(&ctx, &io_error("error"));
    }

    #[test]
    fn test_writer_logger_concurrent_lines_do_not_interleave() {
        let buf = SharedBuffer::default();
        let logger = Arc::new(WriterLogger::new(buf.clone(), true, false));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for j in 0..100 {
                        logger.info(&Context::background(), &format!("thread {} line {}", i, j));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = buf.lines();
        assert_eq!(lines.len(), 400);
        assert!(lines.iter().all(|line| line.starts_with("INFO: thread ")));
    }

    #[test]
    fn test_stdout_and_stderr_constructors() {
        for debug in [true, false] {
            let logger = WriterLogger::stdout(debug);
            assert!(logger.print_level());
            assert_eq!(logger.debug_enabled(), debug);

            let logger = WriterLogger::stderr(debug);
            assert!(logger.print_level());
            assert_eq!(logger.debug_enabled(), debug);
        }
    }

    #[test]
    fn test_writer_logger_config_default() {
        let config = WriterLoggerConfig::default();
        assert_eq!(config.target, Target::Stderr);
        assert_eq!(config.file_path, None);
        assert!(config.print_level);
        assert!(!config.debug);
    }

    #[test]
    fn test_writer_logger_from_config() -> Result<()> {
        let config: WriterLoggerConfig = json5::from_str(
            r#"
            {
                target: "stdout",
                print_level: false,
                debug: true
            }
            "#,
        )?;

        let logger = WriterLogger::try_from(config)?;
        assert!(!logger.print_level());
        assert!(logger.debug_enabled());
        Ok(())
    }

    #[test]
    fn test_writer_logger_file_target() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let path = temp_dir.path().join("nested").join("app.log");

        let config = WriterLoggerConfig {
            target: Target::File,
            file_path: Some(path.display().to_string()),
            ..Default::default()
        };
        let logger = WriterLogger::from_config(config)?;
        logger.info(&Context::background(), "started");
        logger.error(&Context::background(), &io_error("stopped"));

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "INFO: started\nERROR: stopped\n");
        Ok(())
    }

    #[test]
    fn test_writer_logger_file_target_requires_path() {
        let config = WriterLoggerConfig {
            target: Target::File,
            ..Default::default()
        };
        let result = WriterLogger::from_config(config);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("file_path"));
    }
}
