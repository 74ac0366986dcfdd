use podsum_core::Language;

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You extract the most valuable knowledge from content in the requested language. Your summaries feel like high-quality notes on essential wisdom.";

/// The language-specific instruction prompt with title and author filled in.
pub fn user_prompt(language: Language, title: &str, author: &str) -> String {
    match language {
        Language::English => format!(
            r#"Extract the most valuable insights and knowledge from this content:
"{title}" by {author}

Create a focused summary that:
1. Highlights the 10-12 MOST VALUABLE insights, lessons, and actionable takeaways
2. Emphasizes practical knowledge that can be applied immediately
3. Includes the core ideas, frameworks, and mental models discussed
4. Captures any surprising or counter-intuitive points
5. Distills complex ideas into clear, concise explanations
6. Prioritizes depth and value over chronological order

Each bullet point should provide substantial value to someone who wants the knowledge without listening to the full podcast.
Format as bullet points only in English."#
        ),
        Language::Hebrew => format!(
            r#"חלץ את התובנות והידע הכי ערכיים מהתוכן הזה:
"{title}" מאת {author}

צור סיכום ממוקד ש:
1. מדגיש 10-12 תובנות, לקחים ופעולות ערכיות ביותר
2. מדגיש ידע מעשי שניתן ליישם באופן מיידי
3. כולל את הרעיונות המרכזיים, מסגרות החשיבה ומודלים מנטליים שנדונו
4. לוכד נקודות מפתיעות או אינטואיטיביות
5. מזקק רעיונות מורכבים להסברים ברורים ותמציתיים
6. מעדיף עומק וערך על פני סדר כרונולוגי

כל נקודה צריכה לספק ערך משמעותי למישהו שרוצה את הידע מבלי להאזין לפודקאסט המלא.
פרמט כנקודות בלבד בעברית, עם ניקוד מלא וכתיבה מימין לשמאל."#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::user_prompt;
    use podsum_core::Language;

    #[test]
    fn english_prompt_interpolates_and_requests_bullets() {
        let prompt = user_prompt(Language::English, "Deep Work", "Cal Newport");
        assert!(prompt.contains("10-12"));
        assert!(prompt.contains("\"Deep Work\" by Cal Newport"));
        assert!(prompt.contains("Format as bullet points only in English."));
    }

    #[test]
    fn hebrew_prompt_interpolates_and_requests_bullets() {
        let prompt = user_prompt(Language::Hebrew, "Deep Work", "Cal Newport");
        assert!(prompt.contains("10-12"));
        assert!(prompt.contains("\"Deep Work\" מאת Cal Newport"));
        assert!(prompt.contains("פרמט כנקודות בלבד בעברית"));
        assert!(prompt.contains("מימין לשמאל"));
    }
}
