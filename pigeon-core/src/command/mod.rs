//! External command execution
//!
//! The webtext endpoint shells out to a configured text-sending binary. The
//! runner is a trait so handler tests can substitute a fake that records the
//! invocation instead of spawning a process.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run command: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub exit_code: i32,
    /// Combined stdout and stderr, lossily decoded.
    pub output: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// 去掉末尾换行后的输出
    pub fn trimmed_output(&self) -> &str {
        self.output.trim_matches('\n')
    }
}

/// 命令执行器的统一接口
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<RunOutput, CommandError>;
}

/// Runs commands on the host via tokio.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<RunOutput, CommandError> {
        let output = Command::new(program).args(args).output().await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(RunOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}
