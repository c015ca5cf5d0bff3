//! The fixed reference-architecture catalog.
//!
//! Six predefined stacks spanning managed low-effort setups to self-hosted
//! sovereign deployments. Cost models are rough planning figures in euro.

use once_cell::sync::Lazy;

use crate::core::{ComplexityLevel, DataResidency};

use super::{ArchitectureTemplate, Components, CostModel};

static CATALOG: Lazy<Vec<ArchitectureTemplate>> = Lazy::new(|| {
    vec![
        ArchitectureTemplate {
            name: "Managed RAG on Azure OpenAI".to_string(),
            description: "Fully managed retrieval-augmented generation with EU-region \
                          hosting and minimal operational surface."
                .to_string(),
            complexity: ComplexityLevel::Low,
            components: Components {
                llm: "Azure OpenAI GPT-4o".to_string(),
                vector_db: "Azure AI Search".to_string(),
                orchestration: "LangChain".to_string(),
            },
            pros: vec![
                "No infrastructure to operate".to_string(),
                "EU data residency via Azure regions".to_string(),
                "Fast to pilot".to_string(),
            ],
            cons: vec![
                "Per-query pricing grows linearly with volume".to_string(),
                "Vendor lock-in on both model and retrieval".to_string(),
            ],
            code_example: "from langchain_openai import AzureChatOpenAI\n\
                           llm = AzureChatOpenAI(azure_deployment=\"gpt-4o\")\n\
                           chain = retriever | prompt | llm\n\
                           chain.invoke(\"What does clause 7 cover?\")"
                .to_string(),
            residency: DataResidency::Eu,
            required_skills: vec!["python".to_string()],
            cost_model: CostModel {
                base_per_month: 150.0,
                per_query: 0.015,
            },
        },
        ArchitectureTemplate {
            name: "EU Sovereign Managed Stack".to_string(),
            description: "European model and vector providers for workloads where every \
                          processor must sit inside the EU."
                .to_string(),
            complexity: ComplexityLevel::Medium,
            components: Components {
                llm: "Mistral Large (EU endpoint)".to_string(),
                vector_db: "Qdrant Cloud (EU)".to_string(),
                orchestration: "LlamaIndex".to_string(),
            },
            pros: vec![
                "All processors EU-incorporated".to_string(),
                "Competitive per-token pricing".to_string(),
            ],
            cons: vec![
                "Smaller model ecosystem than US hyperscalers".to_string(),
                "Two vendors to contract with".to_string(),
            ],
            code_example: "from llama_index.llms.mistralai import MistralAI\n\
                           index = VectorStoreIndex.from_vector_store(qdrant_store)\n\
                           engine = index.as_query_engine(llm=MistralAI(\"mistral-large-latest\"))"
                .to_string(),
            residency: DataResidency::Eu,
            required_skills: vec!["python".to_string(), "data-engineering".to_string()],
            cost_model: CostModel {
                base_per_month: 300.0,
                per_query: 0.012,
            },
        },
        ArchitectureTemplate {
            name: "Serverless Lightweight Assistant".to_string(),
            description: "Small-model API with a Postgres-backed vector store; the \
                          cheapest way to ship a low-stakes assistant."
                .to_string(),
            complexity: ComplexityLevel::Low,
            components: Components {
                llm: "GPT-4o mini".to_string(),
                vector_db: "pgvector on managed Postgres".to_string(),
                orchestration: "Custom (direct API calls)".to_string(),
            },
            pros: vec![
                "Lowest entry cost in the catalog".to_string(),
                "Reuses existing Postgres operational knowledge".to_string(),
            ],
            cons: vec![
                "US processing only".to_string(),
                "Small model limits answer quality on hard queries".to_string(),
            ],
            code_example: "const answer = await openai.chat.completions.create({\n\
                           \x20 model: \"gpt-4o-mini\",\n\
                           \x20 messages: [{ role: \"user\", content: contextualized }],\n\
                           });"
                .to_string(),
            residency: DataResidency::Us,
            required_skills: vec!["python".to_string(), "sql".to_string()],
            cost_model: CostModel {
                base_per_month: 50.0,
                per_query: 0.004,
            },
        },
        ArchitectureTemplate {
            name: "Hybrid API Gateway".to_string(),
            description: "Frontier model over API with embeddings and retrieval kept \
                          in-house behind a routing gateway."
                .to_string(),
            complexity: ComplexityLevel::Medium,
            components: Components {
                llm: "Claude Sonnet (API)".to_string(),
                vector_db: "pgvector (self-managed)".to_string(),
                orchestration: "Custom gateway service".to_string(),
            },
            pros: vec![
                "Documents never leave your network; only prompts do".to_string(),
                "Model can be swapped behind the gateway".to_string(),
            ],
            cons: vec![
                "Gateway service is yours to operate".to_string(),
                "Prompt content still crosses to the API provider".to_string(),
            ],
            code_example: "let response = gateway\n\
                           \x20   .route(Query::new(user_input).with_context(chunks))\n\
                           \x20   .await?;"
                .to_string(),
            residency: DataResidency::Us,
            required_skills: vec!["python".to_string(), "devops".to_string()],
            cost_model: CostModel {
                base_per_month: 220.0,
                per_query: 0.009,
            },
        },
        ArchitectureTemplate {
            name: "Self-Hosted Open Stack".to_string(),
            description: "Open-weight model served on your own GPUs with a self-hosted \
                          vector database; residency is wherever you rack it."
                .to_string(),
            complexity: ComplexityLevel::High,
            components: Components {
                llm: "Llama 3.1 70B on vLLM".to_string(),
                vector_db: "Weaviate (self-hosted)".to_string(),
                orchestration: "Haystack".to_string(),
            },
            pros: vec![
                "No per-query vendor cost at high volume".to_string(),
                "Full control over data and model weights".to_string(),
            ],
            cons: vec![
                "GPU fleet and serving stack to operate".to_string(),
                "High fixed cost before the first query".to_string(),
            ],
            code_example: "pipeline = Pipeline()\n\
                           pipeline.add_component(\"retriever\", WeaviateRetriever(store))\n\
                           pipeline.add_component(\"llm\", VllmGenerator(model=\"llama-3.1-70b\"))"
                .to_string(),
            residency: DataResidency::Any,
            required_skills: vec!["kubernetes".to_string(), "mlops".to_string()],
            cost_model: CostModel {
                base_per_month: 2_400.0,
                per_query: 0.002,
            },
        },
        ArchitectureTemplate {
            name: "On-Prem Compliance Appliance".to_string(),
            description: "A fine-tuned small model running entirely on-premise for \
                          regulated workloads with strict audit requirements."
                .to_string(),
            complexity: ComplexityLevel::High,
            components: Components {
                llm: "Mistral 7B (fine-tuned, on-prem)".to_string(),
                vector_db: "Milvus".to_string(),
                orchestration: "Custom pipelines".to_string(),
            },
            pros: vec![
                "Nothing crosses the network boundary".to_string(),
                "Cheapest per query once amortized".to_string(),
            ],
            cons: vec![
                "Fine-tuning and evaluation pipeline required".to_string(),
                "Small model needs narrow task scoping".to_string(),
            ],
            code_example: "let completion = appliance\n\
                           \x20   .generate(GenerateRequest::new(prompt).max_tokens(512))?;"
                .to_string(),
            residency: DataResidency::Eu,
            required_skills: vec!["mlops".to_string(), "data-engineering".to_string()],
            cost_model: CostModel {
                base_per_month: 1_800.0,
                per_query: 0.001,
            },
        },
    ]
});

/// The full, unfiltered catalog.
pub fn templates() -> &'static [ArchitectureTemplate] {
    &CATALOG
}
