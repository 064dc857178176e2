use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// 分镜块之间以空行分隔（一个或多个换行夹着空白）
static BLOCK_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// 行首时间码，如 0:00-0:05 或 00:00-00:05
static TIMECODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\d+:\d+-\d+:\d+)(.*)").unwrap());

/// 行首残留的空白和 ▲ 标记
static MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s▲]+").unwrap());

/// 表示一个场景/分镜块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardSegment {
    /// 稳定的合成标识，按出现顺序编号
    pub id: String,
    /// 显示标题，由位置生成，不取自模型回复
    pub header: String,
    /// 块内原文，去除首尾空白，保留内部换行
    pub content: String,
}

/// 分镜块内的一行：可选时间码 + 清理后的正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedLine {
    pub timecode: Option<String>,
    pub body: String,
}

/// 将模型回复拆分为有序的分镜块列表
///
/// 纯函数：相同输入总是产生相同输出，不做任何 IO，也不会失败。
/// 空块被丢弃且不占用序号；全空白的回复产生空列表。
pub fn parse_segments(reply: &str) -> Vec<StoryboardSegment> {
    BLOCK_SPLIT
        .split(reply)
        .filter(|block| !block.trim().is_empty())
        .enumerate()
        .map(|(index, block)| StoryboardSegment {
            id: format!("seg-{}", index),
            header: format!("SCENE {:02}", index + 1),
            content: block.trim().to_string(),
        })
        .collect()
}

/// 将分镜块内容按行分解为时间码 + 正文
///
/// 处理前就是空白的行不产生输出；仅在剥离标记后变空的行仍保留（正文为空）。
/// 时间码只做形状匹配，不校验范围大小。
pub fn parse_timed_lines(content: &str) -> Vec<TimedLine> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (timecode, remainder) = match TIMECODE.captures(line) {
                Some(caps) => (
                    Some(caps[1].to_string()),
                    caps.get(2).map_or("", |m| m.as_str()),
                ),
                None => (None, line),
            };
            let body = MARKER.replace(remainder, "").trim().to_string();
            TimedLine { timecode, body }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_and_headers() {
        let segments = parse_segments("A\n\nB\n\nC");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].id, "seg-0");
        assert_eq!(segments[0].header, "SCENE 01");
        assert_eq!(segments[0].content, "A");
        assert_eq!(segments[1].header, "SCENE 02");
        assert_eq!(segments[1].content, "B");
        assert_eq!(segments[2].header, "SCENE 03");
        assert_eq!(segments[2].content, "C");
    }

    #[test]
    fn test_blank_blocks_consume_no_index() {
        let segments = parse_segments("A\n\n\n\nB");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].header, "SCENE 01");
        assert_eq!(segments[0].content, "A");
        assert_eq!(segments[1].header, "SCENE 02");
        assert_eq!(segments[1].content, "B");
    }

    #[test]
    fn test_whitespace_only_reply_yields_empty_list() {
        assert!(parse_segments("   \n\n  ").is_empty());
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn test_no_blank_boundary_yields_single_segment() {
        let segments = parse_segments("  0:00-0:05 开场\n0:05-0:10 跟拍  ");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "0:00-0:05 开场\n0:05-0:10 跟拍");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let reply = "镜头一\n\n0:00-0:05 镜头二\n\n▲ 镜头三";
        assert_eq!(parse_segments(reply), parse_segments(reply));
    }

    #[test]
    fn test_timecode_extraction() {
        let lines = parse_timed_lines("0:00-0:05 A wide shot opens.");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].timecode.as_deref(), Some("0:00-0:05"));
        assert_eq!(lines[0].body, "A wide shot opens.");
    }

    #[test]
    fn test_line_without_timecode() {
        let lines = parse_timed_lines("▲  Cut to close-up.");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].timecode.is_none());
        assert_eq!(lines[0].body, "Cut to close-up.");
    }

    #[test]
    fn test_timecode_shape_not_validated() {
        let lines = parse_timed_lines("0:90-0:05 倒放镜头");
        assert_eq!(lines[0].timecode.as_deref(), Some("0:90-0:05"));
        assert_eq!(lines[0].body, "倒放镜头");
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        let lines = parse_timed_lines("0:00-0:05 开场\n   \n0:05-0:10 特写");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].timecode.as_deref(), Some("0:00-0:05"));
        assert_eq!(lines[1].timecode.as_deref(), Some("0:05-0:10"));
    }

    #[test]
    fn test_marker_only_remainder_keeps_empty_body() {
        let lines = parse_timed_lines("0:00-0:05 ▲");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].timecode.as_deref(), Some("0:00-0:05"));
        assert_eq!(lines[0].body, "");
    }

    #[test]
    fn test_indented_line_is_not_a_timecode_match() {
        // 时间码必须锚定在行首，缩进的行整体作为正文处理
        let lines = parse_timed_lines("  0:00-0:05 开场");
        assert!(lines[0].timecode.is_none());
        assert_eq!(lines[0].body, "0:00-0:05 开场");
    }
}
