use crate::segment::{parse_timed_lines, StoryboardSegment};

/// 将分镜列表渲染为终端文本
///
/// 解析不出任何分镜块时回退为原样输出回复全文。
pub fn render(reply: &str, segments: &[StoryboardSegment]) -> String {
    if segments.is_empty() {
        return reply.to_string();
    }

    let mut out = String::new();
    for segment in segments {
        out.push_str(&format!("=== {} ===\n", segment.header));
        for line in parse_timed_lines(&segment.content) {
            match &line.timecode {
                Some(timecode) => out.push_str(&format!("  [{}] {}\n", timecode, line.body)),
                None => out.push_str(&format!("  {}\n", line.body)),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::parse_segments;

    #[test]
    fn test_render_scene_cards() {
        let reply = "0:00-0:05 远景开场\n▲ 切近景\n\n0:05-0:10 特写";
        let segments = parse_segments(reply);
        let rendered = render(reply, &segments);
        assert_eq!(
            rendered,
            "=== SCENE 01 ===\n  [0:00-0:05] 远景开场\n  切近景\n\n=== SCENE 02 ===\n  [0:05-0:10] 特写\n\n"
        );
    }

    #[test]
    fn test_render_falls_back_to_raw_reply() {
        let reply = " \n\n ";
        let segments = parse_segments(reply);
        assert!(segments.is_empty());
        assert_eq!(render(reply, &segments), reply);
    }
}
