use chrono::{DateTime, Utc};
use ielts_core::model::{
    AnswerValue, ListeningTest, MarkingCriteria, Question, QuestionType, ReadingTest, Section,
    TaskId, Test, TestDifficulty, TestId, TestMeta, WritingTask, WritingTaskKind, WritingTest,
};

use super::CREATED_BY;

/// Catalog creation time (2024-01-01T00:00:00Z).
const CATALOG_CREATED_AT: i64 = 1_704_067_200;

const LISTENING_INSTRUCTIONS: &str = "Listen to the audio recordings and answer the questions that follow. You will hear each recording only once.";
const READING_INSTRUCTIONS: &str = "Read the passages and answer the questions that follow. You have 60 minutes to complete this test.";
const WRITING_INSTRUCTIONS: &str = "Complete both tasks. You should spend about 20 minutes on Task 1 and 40 minutes on Task 2.";

const TEA_PASSAGE: &str = "The History of Tea

Tea is one of the most widely consumed beverages in the world, second only to water. Its origins can be traced back to ancient China over 5,000 years ago, where legend has it that Emperor Shen Nong discovered tea when leaves from a wild tree blew into his pot of boiling water.

By the Tang Dynasty (618-907 CE), tea had become firmly established as the national drink of China, and tea cultivation and processing had been refined to an art. The first book about tea, \"Cha Jing\" (The Classic of Tea), was written by Lu Yu in the 8th century CE.

Tea was first introduced to Japan in the 6th century by Buddhist monks who had traveled to China to study. However, it wasn't until the early 9th century that tea drinking became a regular practice in Japan, thanks to the efforts of the monk Eichu, who served tea to Emperor Saga.

The Dutch East India Company introduced tea to Europe in the early 17th century. However, it was in England where tea gained particular prominence. The marriage of Charles II to Catherine of Braganza, a Portuguese princess who was an avid tea drinker, helped to popularize tea in the English court.";

const CLIMATE_PASSAGE: &str = "Climate Change and Its Social Implications

The phenomenon of climate change represents one of the most pressing challenges facing human civilization in the 21st century. Scientific consensus has established beyond reasonable doubt that anthropogenic greenhouse gas emissions are the primary driver of observed warming trends and associated environmental disruptions.

While the physical science basis of climate change is well-documented, the social implications of this global phenomenon remain complex and multifaceted. Vulnerable populations, particularly those in developing nations, coastal regions, and impoverished communities, face disproportionate impacts despite having contributed least to the problem.

The concept of climate justice has emerged as a framework for addressing these inequities, emphasizing the ethical dimensions of climate policy and the need for equitable burden-sharing in mitigation and adaptation efforts. This perspective challenges traditional approaches to environmental governance by highlighting historical responsibilities and differential capabilities.";

fn created_at() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(CATALOG_CREATED_AT, 0).unwrap_or_default()
}

fn meta(
    id: &str,
    title: &str,
    difficulty: TestDifficulty,
    duration: u32,
    description: &str,
    instructions: &str,
) -> TestMeta {
    TestMeta {
        id: TestId::new(id),
        title: title.to_owned(),
        difficulty,
        duration,
        description: Some(description.to_owned()),
        instructions: instructions.to_owned(),
        created_at: created_at(),
        updated_at: created_at(),
        created_by: CREATED_BY.to_owned(),
    }
}

fn choice(id: &str, text: &str, options: [&str; 4], answer: &str) -> Question {
    Question::new(id, QuestionType::MultipleChoice, text, answer.into()).with_options(options)
}

fn typed(id: &str, kind: QuestionType, text: &str, answer: &str) -> Question {
    Question::new(id, kind, text, answer.into())
}

fn criteria(ta: &str, cc: &str, lr: &str, gr: &str) -> MarkingCriteria {
    MarkingCriteria {
        task_achievement: ta.to_owned(),
        coherence_cohesion: cc.to_owned(),
        lexical_resource: lr.to_owned(),
        grammatical_range: gr.to_owned(),
    }
}

fn task(
    kind: WritingTaskKind,
    question: &str,
    word_count: u32,
    image_url: Option<&str>,
    marking_criteria: MarkingCriteria,
) -> WritingTask {
    let id = match kind {
        WritingTaskKind::Task1 => "task-1",
        WritingTaskKind::Task2 => "task-2",
    };
    WritingTask {
        id: TaskId::new(id),
        kind,
        question: question.to_owned(),
        word_count,
        image_url: image_url.map(str::to_owned),
        sample_answer: None,
        marking_criteria,
    }
}

/// The practice catalog in display order.
#[must_use]
pub fn mock_tests() -> Vec<Test> {
    vec![
        listening_test_1(),
        listening_test_2(),
        reading_test_1(),
        reading_test_2(),
        writing_test_1(),
        writing_test_2(),
    ]
}

fn listening_test_1() -> Test {
    Test::Listening(ListeningTest {
        meta: meta(
            "listening-test-1",
            "IELTS Listening Practice Test 1",
            TestDifficulty::Medium,
            40,
            "This listening test contains various question types to help you practice for the IELTS exam.",
            LISTENING_INSTRUCTIONS,
        ),
        audio_url: "/audio/sample-listening.mp3".to_owned(),
        audio_length: 1800,
        transcript: None,
        sections: vec![
            Section::new("section-1", "Section 1: Conversation between two people")
                .with_description(
                    "In this section, you will hear a conversation about accommodation arrangements.",
                )
                .with_questions(vec![
                    choice(
                        "q1",
                        "What type of accommodation is the person looking for?",
                        ["A shared apartment", "A studio flat", "A house", "A dormitory"],
                        "A studio flat",
                    ),
                    typed(
                        "q2",
                        QuestionType::FillInTheBlanks,
                        "The maximum budget is $_____ per month.",
                        "800",
                    ),
                    typed(
                        "q3",
                        QuestionType::TrueFalseNotGiven,
                        "The apartment includes utility bills in the rent.",
                        "true",
                    ),
                ]),
            Section::new("section-2", "Section 2: Monologue")
                .with_description(
                    "In this section, you will hear information about a local community event.",
                )
                .with_questions(vec![
                    choice(
                        "q4",
                        "What is the main purpose of the event?",
                        ["Fundraising", "Community building", "Education", "Entertainment"],
                        "Community building",
                    ),
                    typed(
                        "q5",
                        QuestionType::ShortAnswer,
                        "When will the event take place?",
                        "June 15th",
                    ),
                ]),
        ],
    })
}

fn listening_test_2() -> Test {
    Test::Listening(ListeningTest {
        meta: meta(
            "listening-test-2",
            "IELTS Listening Practice Test 2",
            TestDifficulty::Hard,
            40,
            "Academic lectures and technical discussions with complex vocabulary.",
            LISTENING_INSTRUCTIONS,
        ),
        audio_url: "/audio/sample-listening-2.mp3".to_owned(),
        audio_length: 1830,
        transcript: None,
        sections: vec![
            Section::new("section-1", "Section 1: Academic Lecture")
                .with_description(
                    "In this section, you will hear a professor giving a lecture on environmental science.",
                )
                .with_questions(vec![
                    choice(
                        "q1",
                        "What is the main topic of the lecture?",
                        [
                            "Climate change",
                            "Renewable energy",
                            "Water conservation",
                            "Biodiversity",
                        ],
                        "Renewable energy",
                    ),
                    typed(
                        "q2",
                        QuestionType::FillInTheBlanks,
                        "According to the professor, solar energy capacity has increased by _____ percent in the last decade.",
                        "300",
                    ),
                ]),
            Section::new("section-2", "Section 2: Technical Discussion")
                .with_description("In this section, you will hear two engineers discussing a project.")
                .with_questions(vec![
                    choice(
                        "q3",
                        "What challenge are the engineers discussing?",
                        [
                            "Budget constraints",
                            "Time limitations",
                            "Technical difficulties",
                            "Resource allocation",
                        ],
                        "Technical difficulties",
                    ),
                    typed(
                        "q4",
                        QuestionType::TrueFalseNotGiven,
                        "The project will be completed by the end of the month.",
                        "false",
                    ),
                ]),
        ],
    })
}

fn reading_test_1() -> Test {
    Test::Reading(ReadingTest {
        meta: meta(
            "reading-test-1",
            "IELTS Academic Reading Practice Test 1",
            TestDifficulty::Medium,
            60,
            "This reading test contains passages on various topics with different question types.",
            READING_INSTRUCTIONS,
        ),
        passage: TEA_PASSAGE.to_owned(),
        sections: vec![
            Section::new("section-1", "Passage 1")
                .with_description("Questions based on the passage about the history of tea.")
                .with_questions(vec![
                    choice(
                        "q1",
                        "According to the passage, how was tea discovered?",
                        [
                            "Through agricultural experimentation",
                            "When leaves accidentally fell into boiling water",
                            "As a medicinal compound",
                            "Through trade with other countries",
                        ],
                        "When leaves accidentally fell into boiling water",
                    ),
                    typed(
                        "q2",
                        QuestionType::TrueFalseNotGiven,
                        "The first book about tea was written during the Tang Dynasty.",
                        "true",
                    ),
                    typed(
                        "q3",
                        QuestionType::FillInTheBlanks,
                        "Tea was introduced to Japan by ______.",
                        "Buddhist monks",
                    ),
                ]),
            Section::new("section-2", "Passage 2")
                .with_description("Additional questions about the spread of tea.")
                .with_questions(vec![
                    Question::new(
                        "q4",
                        QuestionType::MatchingHeadings,
                        "Match the following countries with when tea was introduced:",
                        AnswerValue::list(["Japan - A", "Europe - C"]),
                    )
                    .with_options([
                        "A. 6th century",
                        "B. 9th century",
                        "C. 17th century",
                        "D. 18th century",
                    ])
                    .with_marks(2),
                ]),
        ],
    })
}

fn reading_test_2() -> Test {
    Test::Reading(ReadingTest {
        meta: meta(
            "reading-test-2",
            "IELTS Academic Reading Practice Test 2",
            TestDifficulty::VeryHard,
            60,
            "Environmental and social sciences passages with advanced vocabulary.",
            READING_INSTRUCTIONS,
        ),
        passage: CLIMATE_PASSAGE.to_owned(),
        sections: vec![
            Section::new("section-1", "Climate Change")
                .with_description("Questions about climate change science and impacts.")
                .with_questions(vec![
                    choice(
                        "q1",
                        "According to the passage, what is the primary driver of climate change?",
                        [
                            "Natural climate cycles",
                            "Solar radiation fluctuations",
                            "Anthropogenic greenhouse gas emissions",
                            "Volcanic activity",
                        ],
                        "Anthropogenic greenhouse gas emissions",
                    ),
                    typed(
                        "q2",
                        QuestionType::TrueFalseNotGiven,
                        "Developing nations have contributed most to climate change.",
                        "false",
                    ),
                ]),
        ],
    })
}

fn writing_test_1() -> Test {
    Test::Writing(WritingTest::from_pair(
        meta(
            "writing-test-1",
            "IELTS Academic Writing Practice Test 1",
            TestDifficulty::Hard,
            60,
            "This writing test contains two tasks: a graph description and an essay.",
            WRITING_INSTRUCTIONS,
        ),
        task(
            WritingTaskKind::Task1,
            "The graph below shows the average monthly temperatures in Tokyo and London. Summarize the information by selecting and reporting the main features, and make comparisons where relevant.",
            150,
            Some("/images/temperature-graph.png"),
            criteria(
                "You should accurately report the main features of the graph, making appropriate comparisons.",
                "Your response should be well-organized with clear progression and appropriate paragraphing.",
                "You should use a range of vocabulary related to temperature trends and comparison.",
                "You should use a variety of sentence structures accurately.",
            ),
        ),
        task(
            WritingTaskKind::Task2,
            "Some people believe that technology has made our lives too complex. To what extent do you agree or disagree with this view?",
            250,
            None,
            criteria(
                "You should address all parts of the question and present a clear position throughout.",
                "Your essay should be well-organized with clear progression and good use of cohesive devices.",
                "You should use a wide range of vocabulary with flexibility and precision.",
                "You should use a variety of complex structures with good control of grammar and punctuation.",
            ),
        ),
    ))
}

fn writing_test_2() -> Test {
    Test::Writing(WritingTest::from_pair(
        meta(
            "writing-test-2",
            "IELTS General Training Writing Practice Test",
            TestDifficulty::Medium,
            60,
            "Formal letter and opinion essay for General Training candidates.",
            WRITING_INSTRUCTIONS,
        ),
        task(
            WritingTaskKind::Task1,
            "You are unhappy with a recent purchase from an online store. Write a letter to the customer service department explaining what you purchased, what the problem is, and what action you would like them to take.",
            150,
            None,
            criteria(
                "You should cover all three bullet points and maintain an appropriate tone for a formal letter.",
                "Your letter should be well-organized with appropriate paragraphing and logical sequencing.",
                "You should demonstrate a range of vocabulary appropriate for a formal complaint letter.",
                "You should use a mix of simple and complex sentence structures accurately.",
            ),
        ),
        task(
            WritingTaskKind::Task2,
            "Some people think that children should begin their formal education at a very early age, while others believe they should start school at around seven years old. Discuss both views and give your own opinion.",
            250,
            None,
            criteria(
                "You should address both views and clearly present your own opinion.",
                "Your essay should have a clear overall progression with effective use of cohesive devices.",
                "You should use a wide range of vocabulary appropriately and accurately.",
                "You should demonstrate a wide range of grammatical structures with good control of punctuation and spelling.",
            ),
        ),
    ))
}
