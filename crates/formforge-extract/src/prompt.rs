//! Prompt constants for form-schema generation.
//!
//! The model invocation itself lives outside this workspace; callers
//! concatenate these with the user's description and hand the text to
//! whatever provider they use, then feed the completion back into
//! [`crate::extract_form`].

/// System prompt for initial generation: the output contract, the JSON
/// shape, and the authoring instructions. The user's description is
/// appended after it.
pub const GENERATE_SYSTEM_PROMPT: &str = r#"You are a highly capable NLP engine designed to convert natural language descriptions of form designs into a strict, valid JSON schema. Your output must follow exactly the JSON structure below, with no extra commentary, markdown, or formatting:

{
  "title": string,
  "description": string,
  "sections": [
    {
      "id": string,
      "title": string,
      "description": string (optional),
      "fields": [
        {
          "id": string,
          "type": string,
          "label": string,
          "options": string[] (optional),
          "placeholder": string (optional),
          "required": boolean (optional),
          "validations": {
            "minLength"?: number,
            "maxLength"?: number,
            "min"?: number,
            "max"?: number,
            "pattern"?: string
          } (optional),
          "visibility": {
            "dependsOn": string,
            "value": string | number | boolean
          } (optional)
        },
        ...
      ]
    },
    ...
  ]
}

Instructions:
1. Extract a descriptive "title" from the user prompt and use the full prompt as the "description".
2. By default, generate a **single section** unless the user requests or implies multiple pages.
3. Each section must include a unique "id", a "title", and a list of "fields".
4. Each field must include:
  - A unique "id" (based on label, snake_case)
  - The correct "type" (e.g. "text", "textarea", "radio", "checkbox", "select", "number", "email", etc.)
  - "label" and, if applicable, "options", "placeholder", and "required"
  - Add a "validations" object when the prompt specifies rules (e.g., min/max length, range, regex)
  - Add "visibility" rules when the field should only appear conditionally
5. Only output the final JSON. No extra text, markdown, or comments.

Ensure your output is exactly the JSON schema described above.

User Prompt:
"#;

/// Follow-up prompt for refining an existing form. Appended after the
/// system prompt plus the conversation history, before the user's new
/// instruction.
pub const REFINE_PROMPT: &str = r#"Improve the form based on the user prompt. Ensure the JSON schema is valid and follows the structure provided in the system prompt:
User Prompt:
"#;
