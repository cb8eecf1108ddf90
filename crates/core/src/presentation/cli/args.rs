// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use dirlist_domain::options::SortSpec;

use super::value_enum::FormatArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirlist",
    version = crate::VERSION,
    about = "ディレクトリ内ファイル/フォルダのメタデータ一覧ツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 一覧対象のディレクトリ
    #[arg(value_hint = ValueHint::DirPath, help_heading = "走査/入力")]
    pub root: PathBuf,

    /// 各ファイルの SHA-256 ハッシュを計算
    #[arg(long, help_heading = "走査/入力")]
    pub hash: bool,

    /// サブフォルダも再帰的に列挙
    #[arg(short, long, help_heading = "走査/入力")]
    pub recursive: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: FormatArg,

    /// ソートキー（複数可, 例: type,size:desc,path）
    #[arg(long, help_heading = "出力")]
    pub sort: Option<SortSpec>,

    /// 出力先ファイル（未指定は標準出力）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// カテゴリ定義 JSON（未指定は組み込みテーブル）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "動作")]
    pub types: Option<PathBuf>,

    /// 読めない項目は警告してスキップし続行（既定は即時終了）
    #[arg(long, help_heading = "動作")]
    pub keep_going: bool,

    /// 進捗メッセージを抑制
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}
