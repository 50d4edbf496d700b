// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::options::{LogLevel, OutputFormat, SortSpec};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "p8tokens",
    version = crate::VERSION,
    about = "PICO-8 カートリッジのトークン数を数える (上限 8192)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 対象のファイルまたはディレクトリ (省略時はカレントディレクトリ)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 複数のカートリッジを1つにまとめる
    Combine {
        /// 結合するカートリッジ (指定順にタブになる)
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,

        /// 出力先 (`.p8` で終わらなければディレクトリとみなし combined.p8 を作る)
        #[arg(short, long, value_hint = ValueHint::AnyPath)]
        output: Option<PathBuf>,
    },

    /// 行ごとのトークン内訳を表示する
    Explain {
        /// 対象のカートリッジ
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// 数えないトークンも表示する
        #[arg(long)]
        all: bool,
    },
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// ソートキー（複数可, 例: tokens:desc,name）
    #[arg(long, default_value = "name", help_heading = "出力")]
    pub sort: SortSpec,
}

/// Walk-related options
#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// 対象拡張子（カンマ区切り/複数指定可）
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "p8",
        value_parser = parsers::parse_extension,
        help_heading = "走査/入力"
    )]
    pub ext: Vec<String>,

    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore を無視する
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// 再帰の最大深さ
    #[arg(long, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// シンボリックリンクをたどる
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 走査スレッド数
    #[arg(short, long, value_parser = parsers::parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    /// 標準入力を NAME のメモリ上の内容として数える (ディスク上の同名ファイルより優先)
    #[arg(long, value_name = "NAME", help_heading = "走査/入力")]
    pub stdin_name: Option<String>,
}

/// Budget and run-mode options
#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// トークン予算
    #[arg(long, default_value_t = p8tokens_core::TOKEN_LIMIT, value_parser = parsers::parse_positive_usize, help_heading = "動作")]
    pub budget: usize,

    /// 合計が予算を超えたら終了コード 2 で終わる
    #[arg(long, help_heading = "動作")]
    pub deny_overflow: bool,

    /// 読めないファイルがあれば即座に失敗する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 変更を監視して再集計する
    #[arg(long, help_heading = "動作")]
    pub watch: bool,

    /// 監視時のまとめ待ち秒数
    #[arg(long, value_parser = parsers::parse_positive_u64, help_heading = "動作")]
    pub watch_interval: Option<u64>,
}

/// Logging options
#[derive(ClapArgs, Debug)]
pub struct LoggingOptions {
    /// 詳細ログ (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "ログ")]
    pub verbose: u8,

    /// ログレベルを直接指定する
    #[arg(long, value_enum, env = "P8TOKENS_LOG", global = true, help_heading = "ログ")]
    pub log_level: Option<LogLevel>,
}
