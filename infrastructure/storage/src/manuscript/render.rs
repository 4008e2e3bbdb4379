use business::domain::autobiography::model::Autobiography;

/// Renders an autobiography as a Markdown manuscript.
pub fn to_markdown(autobiography: &Autobiography) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", autobiography.title));
    lines.push(format!("\n**By {}**\n", autobiography.author_name));
    lines.push("---\n".to_string());

    if !autobiography.prologue.is_empty() {
        lines.push("## Prologue\n".to_string());
        lines.push(autobiography.prologue.clone());
        lines.push("\n---\n".to_string());
    }

    for (i, chapter) in autobiography.chapters.iter().enumerate() {
        lines.push(format!("## Chapter {}: {}", i + 1, chapter.title));
        lines.push(format!(
            "*{} ({})*\n",
            chapter.stage,
            chapter.stage.age_range()
        ));
        lines.push(chapter.content.clone());
        lines.push("\n".to_string());
    }

    if !autobiography.epilogue.is_empty() {
        lines.push("---\n".to_string());
        lines.push("## Epilogue\n".to_string());
        lines.push(autobiography.epilogue.clone());
        lines.push("\n".to_string());
    }

    if !autobiography.key_themes.is_empty() {
        lines.push("---\n".to_string());
        lines.push("### Key themes\n".to_string());
        for theme in &autobiography.key_themes {
            lines.push(format!("- {}", theme));
        }
        lines.push("\n".to_string());
    }

    if !autobiography.life_lessons.is_empty() {
        lines.push("### Life lessons\n".to_string());
        for lesson in &autobiography.life_lessons {
            lines.push(format!("- {}", lesson));
        }
        lines.push("\n".to_string());
    }

    lines.join("\n")
}

/// Renders an autobiography as a plain-text manuscript.
pub fn to_plain_text(autobiography: &Autobiography) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(50));
    lines.push(autobiography.title.clone());
    lines.push(format!("By {}", autobiography.author_name));
    lines.push(format!("{}\n", "=".repeat(50)));

    if !autobiography.prologue.is_empty() {
        lines.push("[Prologue]\n".to_string());
        lines.push(autobiography.prologue.clone());
        lines.push(format!("\n{}\n", "-".repeat(40)));
    }

    for (i, chapter) in autobiography.chapters.iter().enumerate() {
        lines.push(format!("[Chapter {}: {}]", i + 1, chapter.title));
        lines.push(format!(
            "({}, {})\n",
            chapter.stage,
            chapter.stage.age_range()
        ));
        lines.push(chapter.content.clone());
        lines.push(format!("\n{}\n", "-".repeat(40)));
    }

    if !autobiography.epilogue.is_empty() {
        lines.push("[Epilogue]\n".to_string());
        lines.push(autobiography.epilogue.clone());
        lines.push(String::new());
    }

    if !autobiography.key_themes.is_empty() {
        lines.push("=".repeat(50));
        lines.push("[Key themes]".to_string());
        for theme in &autobiography.key_themes {
            lines.push(format!("  - {}", theme));
        }
        lines.push(String::new());
    }

    if !autobiography.life_lessons.is_empty() {
        lines.push("[Life lessons]".to_string());
        for lesson in &autobiography.life_lessons {
            lines.push(format!("  - {}", lesson));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::autobiography::model::{Chapter, create_autobiography};
    use business::domain::autobiography::value_objects::LifeStage;

    fn sample_autobiography() -> Autobiography {
        create_autobiography(
            "A Long Road Home".to_string(),
            "Kim Younghee".to_string(),
            "It begins by the river.".to_string(),
            vec![
                Chapter {
                    stage: LifeStage::Childhood,
                    title: "The river".to_string(),
                    content: "We swam every summer.".to_string(),
                },
                Chapter {
                    stage: LifeStage::Youth,
                    title: "The city".to_string(),
                    content: "I took the night train.".to_string(),
                },
            ],
            "It ends at home.".to_string(),
            vec!["family".to_string(), "perseverance".to_string()],
            vec!["patience".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn should_render_markdown_sections_in_order() {
        let markdown = to_markdown(&sample_autobiography());

        let title_at = markdown.find("# A Long Road Home").unwrap();
        let prologue_at = markdown.find("## Prologue").unwrap();
        let first_chapter_at = markdown.find("## Chapter 1: The river").unwrap();
        let second_chapter_at = markdown.find("## Chapter 2: The city").unwrap();
        let epilogue_at = markdown.find("## Epilogue").unwrap();
        let themes_at = markdown.find("### Key themes").unwrap();
        let lessons_at = markdown.find("### Life lessons").unwrap();

        assert!(title_at < prologue_at);
        assert!(prologue_at < first_chapter_at);
        assert!(first_chapter_at < second_chapter_at);
        assert!(second_chapter_at < epilogue_at);
        assert!(epilogue_at < themes_at);
        assert!(themes_at < lessons_at);
        assert!(markdown.contains("*childhood (0-12)*"));
        assert!(markdown.contains("- family"));
    }

    #[test]
    fn should_render_plain_text_with_labels() {
        let text = to_plain_text(&sample_autobiography());

        assert!(text.contains("By Kim Younghee"));
        assert!(text.contains("[Prologue]"));
        assert!(text.contains("[Chapter 1: The river]"));
        assert!(text.contains("(childhood, 0-12)"));
        assert!(text.contains("[Epilogue]"));
        assert!(text.contains("  - patience"));
    }

    #[test]
    fn should_skip_empty_sections() {
        let autobiography = create_autobiography(
            "Bare".to_string(),
            "A".to_string(),
            String::new(),
            vec![Chapter {
                stage: LifeStage::Childhood,
                title: "Only one".to_string(),
                content: "...".to_string(),
            }],
            String::new(),
            vec![],
            vec![],
        )
        .unwrap();

        let markdown = to_markdown(&autobiography);
        assert!(!markdown.contains("## Prologue"));
        assert!(!markdown.contains("## Epilogue"));
        assert!(!markdown.contains("### Key themes"));
    }
}
