//! Shaping Module Tests
//!
//! End-to-end behavior of the sufficiency classifier, the question bank and
//! the response structurer through their public entry points.

use crate::shaping::{
    format_structured_response, generate_follow_up_questions, needs_more_information,
    EmotionClass, InsufficiencyReason, ResponseShaper, StructuredResponse,
};

#[cfg(test)]
mod sufficiency_tests {
    use super::*;

    #[test]
    fn test_short_messages_need_more_info() {
        let messages = vec!["", "ok", "   hi   ", "fine", "123456789", "\t\n  meh \n"];

        for message in messages {
            let result = needs_more_information(message, "");
            assert!(result.needs_more_info, "Expected too short for '{}'", message);
            assert!(result.reasons.contains(&InsufficiencyReason::TooShort));
        }
    }

    #[test]
    fn test_vague_statements() {
        let messages = vec![
            "I feel bad",
            "I'm feeling really down.",
            "help me",
            "I need help!",
            "I don't know what to do",
            "I DON’T KNOW",
            "I can't take it anymore",
            "Not feeling well.",
            "I'm not okay",
        ];

        for message in messages {
            let result = needs_more_information(message, "");
            assert!(result.needs_more_info, "Expected vague for '{}'", message);
            assert!(
                result.reasons.contains(&InsufficiencyReason::Vague),
                "Expected Vague reason for '{}', got {:?}",
                message,
                result.reasons
            );
        }
    }

    #[test]
    fn test_lacking_detail_statements() {
        let messages = vec![
            "Something happened",
            "this happened again",
            "I have a problem.",
            "I've got an issue",
            "I have problems",
            "I’ve got issues",
            "It's not working",
            "nothing is working",
        ];

        for message in messages {
            let result = needs_more_information(message, "");
            assert!(
                result.reasons.contains(&InsufficiencyReason::LackingDetail),
                "Expected LackingDetail for '{}', got {:?}",
                message,
                result.reasons
            );
        }
    }

    #[test]
    fn test_ten_characters_is_long_enough() {
        // "I feel bad" is exactly ten characters: only the vague check fires.
        let result = needs_more_information("I feel bad", "");
        assert_eq!(result.reasons, vec![InsufficiencyReason::Vague]);
    }

    #[test]
    fn test_detailed_messages_are_sufficient() {
        let messages = vec![
            "I have a problem with my sister and I don't know how to talk to her",
            "I'm not feeling well today because I barely slept",
            "I feel sad and anxious",
            "My exams start next week and I can't focus on revising",
        ];

        for message in messages {
            let result = needs_more_information(message, "");
            assert!(!result.needs_more_info, "Expected sufficient for '{}'", message);
            assert!(result.follow_up_questions.is_none());
            assert!(result.reasons.is_empty());
        }
    }

    #[test]
    fn test_questions_use_untrimmed_message() {
        let result = needs_more_information("  so sad  ", "");
        assert_eq!(
            result.follow_up_questions,
            Some(generate_follow_up_questions("  so sad  ", ""))
        );
        assert_eq!(
            result.follow_up_questions.unwrap()[0],
            EmotionClass::Sad.questions()[0]
        );
    }

    #[test]
    fn test_context_does_not_change_decision() {
        let message = "this happened";
        assert_eq!(
            needs_more_information(message, ""),
            needs_more_information(message, "user lost their job last week"),
        );
    }

    #[test]
    fn test_serialized_shape() {
        let sufficient = needs_more_information("My roommate moved out without paying rent", "");
        assert_eq!(
            serde_json::to_value(&sufficient).unwrap(),
            serde_json::json!({ "needsMoreInfo": false })
        );

        let insufficient = needs_more_information("hm", "");
        let json = serde_json::to_value(&insufficient).unwrap();
        assert_eq!(json["needsMoreInfo"], true);
        assert_eq!(json["followUpQuestions"].as_array().map(|q| q.len()), Some(3));
        assert_eq!(json["reasons"], serde_json::json!(["too_short"]));
    }
}

#[cfg(test)]
mod question_tests {
    use super::*;

    #[test]
    fn test_sad_bucket_regardless_of_surrounding_text() {
        let sad: Vec<String> = EmotionClass::Sad
            .questions()
            .iter()
            .map(|q| q.to_string())
            .collect();

        for message in [
            "sad",
            "I've been DEPRESSED for weeks",
            "feeling down about my grades",
            "I feel sad and anxious",
            "stressed, worried and sad",
        ] {
            assert_eq!(generate_follow_up_questions(message, ""), sad, "'{}'", message);
        }
    }

    #[test]
    fn test_anxious_before_stressed() {
        assert_eq!(
            generate_follow_up_questions("nervous and overwhelmed", "")[0],
            EmotionClass::Anxious.questions()[0]
        );
    }

    #[test]
    fn test_default_bucket() {
        let questions = generate_follow_up_questions("my cat ran away", "");
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0], EmotionClass::General.questions()[0]);
    }

    #[test]
    fn test_buckets_are_distinct() {
        let buckets = [
            EmotionClass::Sad,
            EmotionClass::Anxious,
            EmotionClass::Stressed,
            EmotionClass::General,
        ];
        for (i, a) in buckets.iter().enumerate() {
            for b in &buckets[i + 1..] {
                assert_ne!(a.questions(), b.questions(), "{} vs {}", a, b);
            }
        }
    }
}

#[cfg(test)]
mod structurer_tests {
    use super::*;

    const FULL_REPLY: &str = "I'm sorry you're going through this. It sounds like work has been piling up.
Here are a few things that might help:
• Take short breaks during the day
• Write down your top three priorities
Resources:
- Employee assistance program
Would it help to talk about what's hardest right now?";

    #[test]
    fn test_acknowledgment_and_suggestion() {
        let result =
            format_structured_response("I understand that's hard. You could try deep breathing.");

        assert_eq!(result.acknowledgment, "I understand that's hard.");
        assert_eq!(result.suggestions, "You could try deep breathing.");
        assert!(result.insights.is_empty());
        assert!(result.resources.is_empty());
        assert!(result.follow_up.is_empty());
    }

    #[test]
    fn test_unmarked_text_falls_back_to_insights() {
        let input = "  Random text with no conversational markers.  ";
        let result = format_structured_response(input);

        assert_eq!(
            result,
            StructuredResponse {
                insights: "Random text with no conversational markers.".to_string(),
                ..StructuredResponse::default()
            }
        );
    }

    #[test]
    fn test_empty_input_has_no_fallback() {
        assert_eq!(format_structured_response(""), StructuredResponse::default());
        assert_eq!(format_structured_response("   \n  "), StructuredResponse::default());
    }

    #[test]
    fn test_full_reply() {
        let result = format_structured_response(FULL_REPLY);

        assert_eq!(result.acknowledgment, "I'm sorry you're going through this.");
        assert_eq!(result.insights, "It sounds like work has been piling up.");
        assert_eq!(
            result.suggestions,
            "• Take short breaks during the day\n• Write down your top three priorities"
        );
        assert_eq!(result.resources, "Resources:\n- Employee assistance program");
        assert_eq!(
            result.follow_up,
            "Would it help to talk about what's hardest right now?"
        );
    }

    #[test]
    fn test_first_alternative_wins() {
        let result =
            format_structured_response("You could try journaling tonight.\n• Go for a walk");
        assert_eq!(result.suggestions, "You could try journaling tonight.");
    }

    #[test]
    fn test_sections_may_overlap() {
        let reply = "• Check out this resource on sleep hygiene";
        let result = format_structured_response(reply);

        assert_eq!(result.suggestions, reply);
        assert_eq!(result.resources, reply);
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_resources_do_not_suppress_fallback() {
        let reply = "If things feel unmanageable, please reach out. You can call a crisis line any time.";
        let result = format_structured_response(reply);

        assert_eq!(result.resources, "You can call a crisis line any time.");
        assert_eq!(result.insights, reply);
    }

    #[test]
    fn test_generic_question_follow_up() {
        let reply = "Sounds tough. Anything else on your mind?";
        let result = format_structured_response(reply);

        assert_eq!(result.follow_up, "Anything else on your mind?");
        assert_eq!(result.insights, reply);
    }

    #[test]
    fn test_openers_must_start_a_sentence() {
        let reply = "Losing sleep is something I understand well.";
        let result = format_structured_response(reply);

        assert!(result.acknowledgment.is_empty());
        assert_eq!(result.insights, reply);
    }

    #[test]
    fn test_case_insensitive_openers() {
        let result = format_structured_response("i hear you. you might be carrying a lot.");
        assert_eq!(result.acknowledgment, "i hear you.");
        assert_eq!(result.insights, "you might be carrying a lot.");
    }

    #[test]
    fn test_binary_looking_input() {
        let input = "\u{0}\u{1}\u{2}ÿþ 0101 %%%";
        let result = format_structured_response(input);
        assert_eq!(result.insights, input.trim());
        assert!(result.acknowledgment.is_empty());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            format_structured_response(FULL_REPLY),
            format_structured_response(FULL_REPLY)
        );
        assert_eq!(
            needs_more_information("help", "ctx"),
            needs_more_information("help", "ctx")
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(format_structured_response(FULL_REPLY)).unwrap();
        for key in ["acknowledgment", "insights", "suggestions", "resources", "followUp"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;

    #[test]
    fn test_shared_shaper_across_threads() {
        let shaper = ResponseShaper::new();
        let expected = shaper.structure(FULL_REPLY_SHORT);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        assert_eq!(shaper.structure(FULL_REPLY_SHORT), expected);
                        assert!(shaper.assess("help", "").needs_more_info);
                    }
                });
            }
        });
    }

    const FULL_REPLY_SHORT: &str = "That sounds exhausting. You could try a short walk. How are you sleeping?";
}
