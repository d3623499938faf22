//! Prompt assembly: persona, adaptive-learning context, and the
//! action-plan instructions.
//!
//! The prompt is the only lever over the shape of the model's output.
//! It injects the meal history and disliked ingredients from memory
//! plus the weather string, then pins the recipe markdown template and
//! the `[ACTIONS]` block grammar that `plan::parse` expects.

use crate::model::MemoryRecord;

/// The fixed template and action-plan instructions appended to every
/// recipe prompt. The `<DISH NAME>` placeholders are substituted by the
/// orchestrator after the title is extracted.
const TEMPLATE_INSTRUCTION: &str = "\
First, generate the complete recipe using this template. Use simple language and fill the \
placeholders based on the user's request. CRITICAL: The <DISH NAME> placeholder MUST be a plain \
text title with NO markdown formatting (no asterisks, quotes, or backticks):\n\
## **Recipe Name: <DISH NAME>**\n\n\
* **Servings:** <NUMBER OF SERVINGS>\n\
* **Budget:** <ESTIMATED COST CATEGORY>\n\
* **Effort:** <DIFFICULTY LEVEL>\n\
* **Total Time:** <TOTAL TIME>\n\n\
### **Ingredients:**\n\n\
* <INGREDIENT 1>, <QUANTITY>\n\
* ...\n\n\
### **Instructions (Remy's Simple Steps):**\n\n\
1. <STEP 1 INSTRUCTION>\n\
2. ...\n\n\
### **Chef Remy's Money-Saving Tip:**\n\n\
* <A SIMPLE TIP>\n\n\
Second, generate a structured plan. You MUST include one SAVE_RECIPE action to save the recipe \
and two scheduling actions based on the recipe's Total Time.\n\n\
[ACTIONS]\n\
ACTION_1: SAVE_RECIPE(filename='<DISH NAME>', content='RECIPE MARKDOWN CONTENT')\n\
ACTION_2: ADD_CALENDAR_EVENT(title='Cook <DISH NAME>', time='5 minutes from now', duration='<TOTAL TIME>')\n\
ACTION_3: ADD_REMINDER(time='5 minutes plus <TOTAL TIME> from now', message='Check on <DISH NAME>! This meal is ready.')";

/// Assemble the full prompt for one cook request.
pub fn build(user_input: &str, memory: &MemoryRecord, weather: &str) -> String {
    let history = if memory.history.is_empty() {
        "No recent meals recorded.".to_string()
    } else {
        memory.history.join(", ")
    };
    let disliked = if memory.disliked_ingredients.is_empty() {
        "None.".to_string()
    } else {
        memory.disliked_ingredients.join(", ")
    };

    let system_instruction = format!(
        "You are Chef Remy, the world-class, budget-conscious rat chef from the movie Ratatouille.\n\
         Your tone is encouraging, patient, and focused on simplicity.\n\
         Your goal is to interpret the user's request and provide a recipe.\n\
         \n\
         **CONTEXTUAL RULES FOR ADAPTIVE LEARNING:**\n\
         1. **WEATHER:** {weather}. Adjust recipe type based on temperature (e.g., hot -> no-cook/salads; cold -> stew/bake).\n\
         2. **HISTORY:** The user recently cooked: {history}. DO NOT suggest a recipe with the EXACT same name.\n\
         3. **DISLIKED:** The user has indicated they dislike recipes containing: {disliked}. AVOID using these ingredients unless EXPLICITLY requested by the user.\n\
         \n\
         After generating the complete recipe, you MUST generate a structured action plan.\n\
         Your final output MUST contain two parts: the Recipe Template and the [ACTIONS] block, with NO other commentary."
    );

    format!("System Instruction: {system_instruction}\n\nUser Request: {user_input}\n\n{TEMPLATE_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_history_and_dislikes() {
        let memory = MemoryRecord {
            history: vec!["Egg Fried Rice".into(), "Minestrone".into()],
            disliked_ingredients: vec!["onion".into()],
        };
        let prompt = build("dinner for one", &memory, "Sunny.");

        assert!(prompt.contains("Egg Fried Rice, Minestrone"));
        assert!(prompt.contains("dislike recipes containing: onion."));
        assert!(prompt.contains("Sunny."));
        assert!(prompt.contains("User Request: dinner for one"));
    }

    #[test]
    fn empty_memory_uses_placeholder_wording() {
        let prompt = build("dinner", &MemoryRecord::default(), "Rainy.");

        assert!(prompt.contains("No recent meals recorded."));
        assert!(prompt.contains("dislike recipes containing: None.."));
    }

    #[test]
    fn pins_the_action_block_grammar() {
        let prompt = build("dinner", &MemoryRecord::default(), "Rainy.");

        assert!(prompt.contains("[ACTIONS]"));
        assert!(prompt.contains("ACTION_1: SAVE_RECIPE("));
        assert!(prompt.contains("### **Ingredients:**"));
    }
}
