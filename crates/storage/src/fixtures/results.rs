use chrono::{DateTime, NaiveDate, Utc};
use ielts_core::model::{
    AnswerValue, BandScore, FeedbackItem, ImprovementStrategy, ListeningResult, QuestionId,
    QuestionResult, QuestionType, ReadingResult, ResultId, ResultSummary, SectionQuestions,
    SectionScore, TaskId, TestId, TestResult, WritingCriteria, WritingResult, WritingTaskKind,
    WritingTaskResult,
};

const EXPLANATION: &str = "This explanation clarifies why this answer is correct.";
const REVIEW_OPTIONS: [&str; 4] = ["option A", "option B", "correct answer", "option D"];

fn completed_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn summary(
    id: &str,
    test_id: &str,
    title: &str,
    score: f32,
    completed_at: DateTime<Utc>,
    time_spent: &str,
) -> ResultSummary {
    ResultSummary {
        id: ResultId::new(id),
        test_id: TestId::new(test_id),
        test_title: title.to_owned(),
        score: BandScore::saturating(score),
        completed_at,
        time_spent: time_spent.to_owned(),
    }
}

fn feedback(title: &str, description: &str, suggestions: &[&str], score: Option<f32>) -> FeedbackItem {
    FeedbackItem {
        title: title.to_owned(),
        description: description.to_owned(),
        suggestions: suggestions.iter().map(|s| (*s).to_owned()).collect(),
        score: score.map(BandScore::saturating),
    }
}

fn strategy(title: &str, description: &str) -> ImprovementStrategy {
    ImprovementStrategy {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

fn criterion(name: &str, score: f32, feedback: &str, suggestions: &[&str]) -> WritingCriteria {
    WritingCriteria {
        name: name.to_owned(),
        score: BandScore::saturating(score),
        feedback: feedback.to_owned(),
        suggestions: suggestions.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Generated review block: every `miss_every`-th question (from the first) is wrong,
/// every third one is multiple choice and the rest use `other`.
fn review_section(
    title: &str,
    id_prefix: &str,
    count: usize,
    other: QuestionType,
    miss_every: usize,
) -> SectionQuestions {
    let questions = (0..count)
        .map(|i| {
            let is_correct = i % miss_every != 0;
            let multiple_choice = i % 3 == 0;
            QuestionResult {
                id: QuestionId::new(format!("{id_prefix}-q{}", i + 1)),
                text: format!("This is a sample question {} for {title}", i + 1),
                kind: if multiple_choice {
                    QuestionType::MultipleChoice
                } else {
                    other
                },
                user_answer: AnswerValue::text(if is_correct {
                    "correct answer"
                } else {
                    "incorrect answer"
                }),
                correct_answer: AnswerValue::text("correct answer"),
                options: multiple_choice
                    .then(|| REVIEW_OPTIONS.iter().map(|o| (*o).to_owned()).collect()),
                explanation: Some(EXPLANATION.to_owned()),
                is_correct,
            }
        })
        .collect();
    SectionQuestions {
        title: title.to_owned(),
        questions,
    }
}

fn reading_review() -> Vec<SectionQuestions> {
    vec![
        review_section("Passage 1", "p1", 14, QuestionType::FillInTheBlanks, 4),
        review_section("Passage 2", "p2", 13, QuestionType::TrueFalseNotGiven, 5),
        review_section("Passage 3", "p3", 13, QuestionType::MatchingHeadings, 4),
    ]
}

fn listening_review() -> Vec<SectionQuestions> {
    vec![
        review_section("Section 1", "s1", 10, QuestionType::FillInTheBlanks, 6),
        review_section("Section 2", "s2", 10, QuestionType::TrueFalseNotGiven, 5),
        review_section("Section 3", "s3", 10, QuestionType::Matching, 3),
        review_section("Section 4", "s4", 10, QuestionType::ShortAnswer, 2),
    ]
}

/// All canned results: reading, then listening, then writing.
#[must_use]
pub fn mock_results() -> Vec<TestResult> {
    let mut results = Vec::with_capacity(6);
    results.extend(reading_results().into_iter().map(TestResult::Reading));
    results.extend(listening_results().into_iter().map(TestResult::Listening));
    results.extend(writing_results().into_iter().map(TestResult::Writing));
    results
}

fn reading_results() -> Vec<ReadingResult> {
    vec![
        ReadingResult {
            summary: summary(
                "reading-result-1",
                "reading-test-1",
                "IELTS Academic Reading Practice Test 1",
                7.5,
                completed_on(2023, 12, 5),
                "54 minutes",
            ),
            correct_answers: 28,
            total_questions: 40,
            section_scores: vec![
                SectionScore::new("Passage 1", 11, 14),
                SectionScore::new("Passage 2", 9, 13),
                SectionScore::new("Passage 3", 8, 13),
            ],
            question_review: reading_review(),
            ai_feedback: vec![
                feedback(
                    "Reading Comprehension",
                    "You demonstrated good understanding of explicit information but struggled with implicit meanings and inferences.",
                    &[
                        "Practice identifying unstated implications in academic texts",
                        "Focus on understanding the author's perspective and tone",
                        "Work on recognizing paraphrased information",
                    ],
                    None,
                ),
                feedback(
                    "Vocabulary Skills",
                    "Your vocabulary range is adequate for understanding most of the text, but some academic terms caused difficulty.",
                    &[
                        "Expand your academic vocabulary, particularly in science and technology",
                        "Create a word bank of synonyms for common academic terms",
                        "Practice word-formation exercises to recognize different forms of words",
                    ],
                    None,
                ),
                feedback(
                    "Time Management",
                    "You spent too much time on the first passage, which limited your time for the third passage.",
                    &[
                        "Allocate specific time limits for each passage (about 20 minutes each)",
                        "Practice skimming techniques to quickly identify key information",
                        "For difficult questions, make an educated guess and move on rather than spending too much time",
                    ],
                    None,
                ),
            ],
        },
        ReadingResult {
            summary: summary(
                "reading-result-2",
                "reading-test-2",
                "IELTS Academic Reading Practice Test 2",
                6.5,
                completed_on(2023, 11, 15),
                "58 minutes",
            ),
            correct_answers: 24,
            total_questions: 40,
            section_scores: vec![
                SectionScore::new("Passage 1", 10, 14),
                SectionScore::new("Passage 2", 8, 13),
                SectionScore::new("Passage 3", 6, 13),
            ],
            question_review: reading_review(),
            ai_feedback: vec![
                feedback(
                    "Detail Recognition",
                    "You performed well on general understanding questions but missed several specific details.",
                    &[
                        "Practice identifying key details within complex sentences",
                        "Pay more attention to qualifying language (e.g., \"sometimes\", \"often\", \"rarely\")",
                        "Work on questions requiring precise factual information",
                    ],
                    None,
                ),
                feedback(
                    "Skimming and Scanning",
                    "Your performance suggests you may benefit from improved skimming and scanning techniques.",
                    &[
                        "Practice quickly identifying paragraph topics by reading first and last sentences",
                        "Learn to recognize keywords and their synonyms/paraphrases in the text",
                        "Develop a systematic approach to locating information in the text",
                    ],
                    None,
                ),
                feedback(
                    "Higher-order Skills",
                    "Questions requiring inference or understanding the author's purpose were challenging for you.",
                    &[
                        "Practice identifying the author's tone and attitude",
                        "Work on questions that ask about the purpose of paragraphs or sections",
                        "Develop skills in recognizing the logical structure of arguments",
                    ],
                    None,
                ),
            ],
        },
    ]
}

fn listening_results() -> Vec<ListeningResult> {
    vec![
        ListeningResult {
            summary: summary(
                "listening-result-1",
                "listening-test-1",
                "IELTS Listening Practice Test 1",
                7.0,
                completed_on(2023, 12, 1),
                "37 minutes",
            ),
            correct_answers: 29,
            total_questions: 40,
            section_scores: vec![
                SectionScore::new("Section 1", 9, 10),
                SectionScore::new("Section 2", 8, 10),
                SectionScore::new("Section 3", 7, 10),
                SectionScore::new("Section 4", 5, 10),
            ],
            question_review: listening_review(),
            ai_feedback: vec![
                feedback(
                    "Listening Comprehension",
                    "You performed well on descriptive sections but struggled with academic lectures.",
                    &[
                        "Practice listening to longer academic lectures or podcasts",
                        "Focus on understanding the main points and supporting details",
                        "Work on note-taking while listening to lengthy explanations",
                    ],
                    None,
                ),
                feedback(
                    "Accent Recognition",
                    "You had some difficulty with certain accents, particularly in Section 4.",
                    &[
                        "Listen to a variety of English accents through documentaries or interviews",
                        "Focus on speakers from different regions (UK, US, Australia, etc.)",
                        "Practice with listening materials that feature different accents",
                    ],
                    None,
                ),
                feedback(
                    "Number Recognition",
                    "You missed several answers involving numbers, dates, and measurements.",
                    &[
                        "Practice specific exercises focused on numbers and measurements",
                        "Pay attention to units of measurement (km, kg, etc.)",
                        "Listen for clues like \"approximately,\" \"just over,\" etc.",
                    ],
                    None,
                ),
            ],
            improvement_strategies: vec![
                strategy(
                    "Prediction",
                    "Before the audio begins, read the questions and predict the type of information needed (a name, a number, etc.). This prepares your mind to listen for specific details.",
                ),
                strategy(
                    "Keywords",
                    "Identify keywords in questions and listen for synonyms or paraphrases of these words in the audio.",
                ),
                strategy(
                    "Note-taking",
                    "Practice efficient note-taking techniques. Focus on recording key information rather than trying to write everything.",
                ),
                strategy(
                    "Spelling",
                    "Pay attention to spelling, especially for names, places, and technical terms. Listen for spelling clarifications in the audio.",
                ),
            ],
        },
        ListeningResult {
            summary: summary(
                "listening-result-2",
                "listening-test-2",
                "IELTS Listening Practice Test 2",
                6.0,
                completed_on(2023, 11, 10),
                "40 minutes",
            ),
            correct_answers: 23,
            total_questions: 40,
            section_scores: vec![
                SectionScore::new("Section 1", 8, 10),
                SectionScore::new("Section 2", 7, 10),
                SectionScore::new("Section 3", 5, 10),
                SectionScore::new("Section 4", 3, 10),
            ],
            question_review: listening_review(),
            ai_feedback: vec![
                feedback(
                    "Academic Context",
                    "You had significant difficulty with academic contexts in Sections 3 and 4.",
                    &[
                        "Regularly listen to academic lectures and discussions on platforms like YouTube or podcasts",
                        "Practice with materials that contain academic vocabulary and concepts",
                        "Work on understanding the relationships between ideas in academic discussions",
                    ],
                    None,
                ),
                feedback(
                    "Spelling and Grammar",
                    "Several of your answers had spelling errors that made them incorrect.",
                    &[
                        "Pay attention to common spelling patterns in English",
                        "Review basic grammar rules for singular/plural and verb forms",
                        "Practice transcribing spoken words accurately",
                    ],
                    None,
                ),
                feedback(
                    "Distraction Management",
                    "You seemed to be misled by distractors in the audio.",
                    &[
                        "Practice identifying when speakers correct themselves or change direction",
                        "Listen for qualifying phrases like \"however,\" \"on the other hand,\" etc.",
                        "Pay attention to the final answer, not just the first information mentioned",
                    ],
                    None,
                ),
            ],
            improvement_strategies: vec![
                strategy(
                    "Focused Practice",
                    "Dedicate extra practice time to the more challenging academic sections (3 and 4).",
                ),
                strategy(
                    "Active Listening",
                    "Engage actively with the material by predicting answers and confirming or adjusting as you listen.",
                ),
                strategy(
                    "Vocabulary Building",
                    "Build your academic vocabulary to better understand lectures and discussions.",
                ),
                strategy(
                    "Transfer Skills",
                    "Write exactly what you hear - practice transferring the correct information to your answer sheet.",
                ),
            ],
        },
    ]
}

const TOKYO_LONDON_ANSWER: &str = "The line graph compares the average monthly temperatures in Tokyo and London throughout a year.

Overall, Tokyo has more extreme temperature variations than London, which maintains a more moderate climate throughout the year.

In January, both cities experience their lowest temperatures, with Tokyo at about 5°C and London slightly warmer at around 8°C. As spring approaches, temperatures in both cities gradually rise, but Tokyo warms up more rapidly than London.

By July and August, Tokyo reaches its highest temperatures of approximately 25°C, while London peaks at only about 18°C during the same period. This shows a significant difference of 7°C between the two cities in summer.

After August, temperatures in both cities begin to decline, with Tokyo cooling more dramatically than London through autumn. By December, Tokyo's temperature falls back to around 6°C, while London returns to about 8°C.

In conclusion, while both cities follow similar seasonal patterns, Tokyo experiences a much wider temperature range (approximately 20°C difference between summer and winter) compared to London's more modest variation (about 10°C difference).";

const TECHNOLOGY_ANSWER: &str = "In today's rapidly evolving world, technology has become an integral part of our daily lives. Some individuals argue that technological advancements have unnecessarily complicated our existence. This essay will discuss the extent to which I agree with this perspective.

On one hand, technology has undoubtedly added layers of complexity to modern life. The constant stream of notifications from multiple devices demands our attention throughout the day, potentially leading to information overload and decreased focus. Furthermore, many people feel pressured to keep up with the latest gadgets and software updates, which can be both financially and mentally taxing.

However, I believe that the complexity added by technology is outweighed by the simplification it brings to many aspects of life. Online banking and digital payments have eliminated the need for physical visits to financial institutions and carrying cash. Video conferencing allows for instant communication with people across the globe, removing geographical barriers.

In conclusion, while technology does introduce certain complexities, I largely disagree with the view that it has made life too complex overall. The key lies in mindful adoption of technology and maintaining balance in its usage.";

const TOKYO_LONDON_IMPROVED: &str = "The line graph illustrates how average monthly temperatures fluctuate throughout the year in both Tokyo and London.

It is immediately apparent that Tokyo experiences more extreme temperature variations compared to London, which has a more moderate climate. During winter (December to February), both cities record their lowest temperatures, with Tokyo averaging approximately 5-7°C and London slightly warmer at around 8°C.

As spring progresses, both cities gradually warm up, though Tokyo's temperature rises more steeply. By summer (June to August), Tokyo becomes significantly hotter, reaching a peak of around 25-27°C in August, while London's summer temperatures plateau at approximately 18°C.

Overall, while both cities follow similar seasonal patterns, Tokyo experiences a much wider temperature range (approximately 20°C difference between summer and winter) compared to London's more modest variation (about 10°C difference).";

const COMPLAINT_ANSWER: &str = "Dear Sir/Madam,

I am writing to express my dissatisfaction with a recent purchase I made from your online store on 15 October 2023.

I ordered a wireless Bluetooth headphone set (Model XH-2000) for $149.99, which was delivered on 20 October. Upon opening the package and testing the product, I discovered several issues with the headphones.

Firstly, the right earpiece produces a constant static noise whenever music is playing. Secondly, the battery life lasts only about two hours, despite the product description stating it would last for eight hours. Finally, the charging case does not close properly, making it difficult to charge the headphones.

Given these problems, I would like to request a full refund. I have attached a copy of my invoice (Order #45678) and photos showing the defects mentioned.

Yours faithfully,
John Smith";

const EDUCATION_ANSWER: &str = "The appropriate age for children to begin formal education is a topic that generates considerable debate. While some advocate for early academic training, others prefer delaying structured schooling until around age seven. This essay will examine both perspectives before offering my own position.

Proponents of early formal education argue that young children's brains are highly receptive to learning during these formative years. Early exposure to structured learning environments develops crucial cognitive, social, and linguistic skills.

On the other hand, those who favor later school entry point to Scandinavian educational models, where formal schooling often begins at age seven. They argue that young children learn best through play and exploration rather than structured lessons.

In conclusion, while both early and delayed formal education have merits, I believe the quality and type of early learning experiences matter more than their timing.";

const COMPLAINT_IMPROVED: &str = "Dear Sir/Madam,

I am writing to express my dissatisfaction regarding a recent purchase made from your online store (Order #45678) on 15 October 2023.

The item in question is a pair of XH-2000 Wireless Bluetooth Headphones, priced at $149.99, which was delivered to my address on 20 October. Upon careful examination of the product, I have identified several significant defects that have rendered the headphones unusable for their intended purpose.

Given these substantial issues that prevent the product from functioning as advertised, I am requesting a full refund. I have attached copies of the purchase invoice and photographic evidence documenting the aforementioned defects for your reference.

Yours faithfully,
John Smith";

#[allow(clippy::too_many_lines)]
fn writing_results() -> Vec<WritingResult> {
    vec![
        WritingResult {
            summary: summary(
                "writing-result-1",
                "writing-test-1",
                "IELTS Academic Writing Practice Test 1",
                6.5,
                completed_on(2023, 11, 20),
                "58 minutes",
            ),
            writing_tasks: vec![
                WritingTaskResult {
                    id: TaskId::new("task1"),
                    kind: WritingTaskKind::Task1,
                    question: "The graph below shows the average monthly temperatures in Tokyo and London. Summarize the information by selecting and reporting the main features, and make comparisons where relevant.".to_owned(),
                    word_count: 178,
                    user_answer: TOKYO_LONDON_ANSWER.to_owned(),
                    criteria: vec![
                        criterion(
                            "Task Achievement",
                            7.0,
                            "You have covered the key trends in the graph and made appropriate comparisons between the two cities.",
                            &[
                                "Include more precise figures for some months to strengthen your analysis",
                                "Highlight the rate of change more explicitly in the transitional seasons",
                            ],
                        ),
                        criterion(
                            "Coherence & Cohesion",
                            7.0,
                            "Your response has a clear organizational structure with appropriate paragraphing.",
                            &[
                                "Use a wider range of linking expressions",
                                "Consider organizing information by seasons rather than chronologically",
                            ],
                        ),
                        criterion(
                            "Lexical Resource",
                            6.0,
                            "You use an adequate range of vocabulary with some flexibility.",
                            &[
                                "Incorporate more precise vocabulary for describing trends (e.g., \"fluctuates,\" \"plateaus\")",
                                "Use more synonyms to avoid repetition of words like \"temperatures\" and \"rises\"",
                            ],
                        ),
                        criterion(
                            "Grammatical Range & Accuracy",
                            6.0,
                            "You use a mix of simple and complex sentence structures with reasonable accuracy.",
                            &[
                                "Use a wider variety of complex structures",
                                "Pay attention to article usage in some sentences",
                            ],
                        ),
                    ],
                    score: BandScore::saturating(6.5),
                },
                WritingTaskResult {
                    id: TaskId::new("task2"),
                    kind: WritingTaskKind::Task2,
                    question: "Some people believe that technology has made our lives too complex. To what extent do you agree or disagree with this view?".to_owned(),
                    word_count: 278,
                    user_answer: TECHNOLOGY_ANSWER.to_owned(),
                    criteria: vec![
                        criterion(
                            "Task Response",
                            8.0,
                            "You have fully addressed all parts of the task with a clear position that is developed throughout.",
                            &[
                                "Consider providing more specific examples of technologies to strengthen your arguments",
                                "Include a brief counterargument to your conclusion to show deeper critical thinking",
                            ],
                        ),
                        criterion(
                            "Coherence & Cohesion",
                            7.0,
                            "Your essay is well-organized with a clear progression of ideas.",
                            &[
                                "Use more sophisticated linking words to show relationships between ideas",
                                "Consider using a more varied paragraph structure to enhance the flow",
                            ],
                        ),
                        criterion(
                            "Lexical Resource",
                            7.0,
                            "You demonstrate a good range of vocabulary related to technology and its impacts.",
                            &[
                                "Incorporate more academic collocations",
                                "Use more precise synonyms to avoid repetition of key terms",
                            ],
                        ),
                        criterion(
                            "Grammatical Range & Accuracy",
                            7.0,
                            "You use a variety of complex structures with generally good control.",
                            &[
                                "Include more complex conditional structures",
                                "Pay attention to article usage in some sentences",
                            ],
                        ),
                    ],
                    score: BandScore::saturating(7.5),
                },
            ],
            ai_feedback: vec![
                feedback(
                    "Task Achievement/Response",
                    "You have addressed the task but some key points could be developed further.",
                    &[
                        "Make sure to cover all the main features in Task 1",
                        "Compare the data more explicitly",
                        "Be more precise in your descriptions of trends",
                    ],
                    Some(6.0),
                ),
                feedback(
                    "Coherence & Cohesion",
                    "Your response is generally coherent with some use of cohesive devices.",
                    &[
                        "Use a wider range of linking words",
                        "Ensure each paragraph has a clear central topic",
                        "Use more referencing terms (this, these, etc.)",
                    ],
                    Some(6.0),
                ),
                feedback(
                    "Lexical Resource",
                    "You use an adequate range of vocabulary with some flexibility.",
                    &[
                        "Incorporate more academic vocabulary",
                        "Use more precise words to describe trends",
                        "Try to avoid repetition of key terms",
                    ],
                    Some(6.5),
                ),
                feedback(
                    "Grammatical Range",
                    "You use a mix of simple and complex structures but with some errors.",
                    &[
                        "Review your use of articles (a, an, the)",
                        "Pay attention to subject-verb agreement",
                        "Try to use a wider variety of complex sentences",
                    ],
                    Some(6.0),
                ),
            ],
            improvement_points: vec![
                "Develop your ideas with more specific examples and details".to_owned(),
                "Use a wider range of linking words and phrases to connect ideas".to_owned(),
                "Incorporate more academic vocabulary and collocations".to_owned(),
                "Vary your sentence structures more to demonstrate grammatical range".to_owned(),
                "Allocate your time better between Task 1 and Task 2".to_owned(),
            ],
            sample_improvement: TOKYO_LONDON_IMPROVED.to_owned(),
        },
        WritingResult {
            summary: summary(
                "writing-result-2",
                "writing-test-2",
                "IELTS General Training Writing Practice Test",
                7.0,
                completed_on(2023, 10, 30),
                "62 minutes",
            ),
            writing_tasks: vec![
                WritingTaskResult {
                    id: TaskId::new("task1"),
                    kind: WritingTaskKind::Task1,
                    question: "You are unhappy with a recent purchase from an online store. Write a letter to the customer service department explaining what you purchased, what the problem is, and what action you would like them to take.".to_owned(),
                    word_count: 163,
                    user_answer: COMPLAINT_ANSWER.to_owned(),
                    criteria: vec![
                        criterion(
                            "Task Achievement",
                            8.0,
                            "You have fully addressed all three bullet points. Your letter follows the appropriate formal format.",
                            &[
                                "You could provide slightly more detail about the purchase process",
                                "Consider mentioning your customer satisfaction history with the company",
                            ],
                        ),
                        criterion(
                            "Coherence & Cohesion",
                            7.0,
                            "Your letter is well-organized with clear paragraphing and logical progression.",
                            &[
                                "You could use a slightly wider range of linking words",
                                "Consider using more referencing (e.g., \"these issues\" instead of repeating \"the problems\")",
                            ],
                        ),
                        criterion(
                            "Lexical Resource",
                            7.0,
                            "You use vocabulary accurately and appropriately for the context of a formal complaint letter.",
                            &[
                                "Consider using more precise vocabulary in some places",
                                "You could include more formal expressions typical of business correspondence",
                            ],
                        ),
                        criterion(
                            "Grammatical Range & Accuracy",
                            7.0,
                            "You use a mix of sentence structures with good control.",
                            &[
                                "Try incorporating more complex sentence structures",
                                "Consider using more passive constructions for formal effect",
                            ],
                        ),
                    ],
                    score: BandScore::saturating(7.0),
                },
                WritingTaskResult {
                    id: TaskId::new("task2"),
                    kind: WritingTaskKind::Task2,
                    question: "Some people think that children should begin their formal education at a very early age, while others believe they should start school at around seven years old. Discuss both views and give your own opinion.".to_owned(),
                    word_count: 264,
                    user_answer: EDUCATION_ANSWER.to_owned(),
                    criteria: vec![
                        criterion(
                            "Task Response",
                            8.0,
                            "You have addressed both views and clearly stated your own opinion.",
                            &[
                                "Include more specific examples to support your points",
                                "Your conclusion could more explicitly restate your position",
                            ],
                        ),
                        criterion(
                            "Coherence & Cohesion",
                            7.0,
                            "Your essay is well-organized with clear paragraphing and good use of cohesive devices.",
                            &[
                                "Use a wider variety of linking expressions",
                                "Consider using more referencing to avoid repetition",
                            ],
                        ),
                        criterion(
                            "Lexical Resource",
                            7.0,
                            "You use a good range of vocabulary with general accuracy.",
                            &[
                                "Incorporate more uncommon vocabulary items",
                                "Use more precise terms in some places",
                            ],
                        ),
                        criterion(
                            "Grammatical Range & Accuracy",
                            7.0,
                            "You use a variety of complex structures with good control.",
                            &[
                                "Use a wider range of complex grammatical structures",
                                "Include more conditional sentences to discuss hypothetical situations",
                            ],
                        ),
                    ],
                    score: BandScore::saturating(7.5),
                },
            ],
            ai_feedback: vec![
                feedback(
                    "Task Achievement/Response",
                    "Your responses generally address the tasks well.",
                    &[
                        "Include more specific examples in Task 2",
                        "Make your position in the conclusion of Task 2 more explicit",
                        "Consider developing some points in greater depth",
                    ],
                    Some(7.0),
                ),
                feedback(
                    "Coherence & Cohesion",
                    "Both tasks show good organization with appropriate paragraphing.",
                    &[
                        "Use a wider range of linking words and phrases",
                        "Improve referencing to reduce repetition",
                        "Consider using more organizational patterns (e.g., problem-solution, cause-effect)",
                    ],
                    Some(7.0),
                ),
                feedback(
                    "Lexical Resource",
                    "You demonstrate a good vocabulary range appropriate to both tasks.",
                    &[
                        "Incorporate more topic-specific vocabulary",
                        "Use more academic collocations in Task 2",
                        "Consider using more precise adjectives and adverbs",
                    ],
                    Some(7.0),
                ),
                feedback(
                    "Grammatical Range",
                    "You use a mix of simple and complex structures with good control.",
                    &[
                        "Incorporate more complex sentence types",
                        "Use more passive structures where appropriate",
                        "Consider using more modal verbs to express nuanced opinions",
                    ],
                    Some(7.0),
                ),
            ],
            improvement_points: vec![
                "Develop your arguments with more specific examples and evidence".to_owned(),
                "Use a wider range of cohesive devices and linking expressions".to_owned(),
                "Incorporate more academic vocabulary, especially in Task 2".to_owned(),
                "Experiment with more complex grammatical structures".to_owned(),
                "Make your conclusion more impactful by clearly restating your position".to_owned(),
            ],
            sample_improvement: COMPLAINT_IMPROVED.to_owned(),
        },
    ]
}
