//! Prompt templates, one per generation route.
//!
//! Request fields are substituted verbatim with no escaping.

use crate::models::{MathRequest, QuizRequest, StoryRequest, TranslateRequest, WordsRequest};

pub fn story_prompt(req: &StoryRequest) -> String {
    format!(
        "Write a short fun story (max 200 words) for a {age}-year-old indian child about {topic}. \n  \
         Use simple English. Do not use * inside story.",
        age = req.age,
        topic = req.topic,
    )
}

pub fn quiz_prompt(req: &QuizRequest) -> String {
    format!(
        r#"
  Based on this story:
  "{story}"

  Create 10 multiple-choice questions for kids.
  Each must have 4 options (A, B, C, D) and one correct answer.
  Return STRICT JSON only:
  {{
    "questions": [
      {{
        "question": "...",
        "options": ["A", "B", "C", "D"],
        "answer": "Correct Option"
      }}
    ]
  }}
  "#,
        story = req.story,
    )
}

pub fn translate_prompt(req: &TranslateRequest, language: &str) -> String {
    format!(
        "Translate this into {language} with simple words for kids:\n\n{text}",
        text = req.text,
    )
}

pub fn words_prompt(req: &WordsRequest) -> String {
    format!(
        "Pretend you are a {age}-year-old Indian child. Describe your daily routine in your own \
         words (max 200 words), step by step, from morning to night. Use Indian food, modern \
         games like cricket, football, and toys. Do not use * or old games.",
        age = req.age,
    )
}

pub fn math_prompt(req: &MathRequest) -> String {
    format!(
        r#"
  Generate 5 {operation} math problems for a {age}-year-old child.
  Return ONLY valid JSON array:
  [
    {{"question": "5 + 3 =", "answer": 8}},
    {{"question": "10 + 2 =", "answer": 12}}
  ]
  "#,
        operation = req.operation,
        age = req.age,
    )
}
