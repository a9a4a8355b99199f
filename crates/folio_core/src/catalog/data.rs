//! Compiled-in portfolio content.
//!
//! Record order is display order. `procedural-generator` is authored twice;
//! the second, shorter entry is shadowed by the first on lookup.

use crate::model::project::{
    CaseStudy, CaseStudyNote, Category, Outcomes, Project, ProjectLinks,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn notes(values: &[(&str, &str)]) -> Vec<CaseStudyNote> {
    values
        .iter()
        .map(|(title, description)| CaseStudyNote::new(*title, *description))
        .collect()
}

fn links(slug: &str, demo_host: &str) -> ProjectLinks {
    ProjectLinks {
        demo_url: Some(format!("https://{demo_host}.example.com")),
        github_url: Some(format!("https://github.com/mechtech-star/{slug}")),
    }
}

/// Returns the authored project records in display order.
pub fn authored_projects() -> Vec<Project> {
    vec![
        webxr_collaboration(),
        unity_training(),
        procedural_generator(),
        Project {
            tags: strings(&["Unity", "Compute Shaders", "Procedural", "Performance"]),
            links: links("procedural-generator", "procedural-demo"),
            ..Project::new(
                "procedural-generator",
                "Procedural Environment Generator",
                Category::UnityXr,
                "Runtime terrain and asset generation with LOD management, optimized for mobile XR devices at 72fps.",
            )
        },
        Project {
            tags: strings(&["Simulation", "Compute Shaders", "Physics", "Unity"]),
            links: links("fluid-simulation", "fluid-sim-demo"),
            ..Project::new(
                "fluid-simulation",
                "Physics-Based Fluid Simulation",
                Category::Simulation,
                "Real-time computational fluid dynamics using SPH method, integrated into Unity with custom rendering pipeline.",
            )
        },
        Project {
            tags: strings(&["WebGL", "GLSL", "Three.js", "React"]),
            links: links("shader-playground", "shader-playground"),
            ..Project::new(
                "shader-playground",
                "WebGL Shader Playground",
                Category::WebXr,
                "Interactive shader editor for WebGL with live preview, parameter tuning, and export to Three.js materials.",
            )
        },
        Project {
            tags: strings(&["ARKit", "ARCore", "Unity", "Computer Vision"]),
            links: links("ar-placement", "ar-placement-demo"),
            ..Project::new(
                "ar-placement",
                "AR Object Placement System",
                Category::UnityXr,
                "Surface detection and physics-aware object placement for mobile AR with occlusion and lighting estimation.",
            )
        },
        Project {
            tags: strings(&["ML", "Three.js", "WebGL", "Data Viz"]),
            links: links("nn-visualization", "nn-viz"),
            ..Project::new(
                "nn-visualization",
                "Neural Network Visualization",
                Category::Experiments,
                "3D interactive visualization of neural network architectures and training processes in real-time.",
            )
        },
        Project {
            tags: strings(&["Performance", "Benchmark", "Compute", "Analysis"]),
            links: links("particle-benchmark", "particle-benchmark"),
            ..Project::new(
                "particle-benchmark",
                "Particle System Benchmark",
                Category::Experiments,
                "Performance testing framework comparing GPU particle systems across Unity, Three.js, and Babylon.js.",
            )
        },
        Project {
            tags: strings(&["Simulation", "AI", "Pathfinding", "Unity"]),
            links: links("path-planning", "path-planning-demo"),
            ..Project::new(
                "path-planning",
                "Multi-Agent Path Planning",
                Category::Simulation,
                "Crowd simulation system with collision avoidance, navigation meshes, and emergent behavior patterns.",
            )
        },
    ]
}

fn webxr_collaboration() -> Project {
    Project {
        long_description: Some(
            "Real-time multi-user collaboration in browser-based XR environments with spatial audio, hand tracking, and persistent state synchronization."
                .to_string(),
        ),
        tags: strings(&[
            "WebXR",
            "Three.js",
            "WebSocket",
            "Node.js",
            "Spatial Audio",
            "WebRTC",
        ]),
        links: links("webxr-collaboration", "webxr-demo"),
        case_study: Some(CaseStudy {
            problem_statement: Some(
                "Existing collaboration tools for XR require native apps, proprietary platforms, or complex setup. Teams needed a way to meet in shared 3D spaces instantly — accessible through a web browser, supporting multiple simultaneous users, with natural spatial audio and hand-tracked interactions. The system had to work on Quest, desktop VR, and flat screens simultaneously."
                    .to_string(),
            ),
            system_overview: strings(&[
                "The platform is built on WebXR APIs for device compatibility, Three.js for rendering, and a custom Node.js server for state synchronization. Client-side prediction and server reconciliation handle network latency. Spatial audio uses Web Audio API with HRTF positioning.",
                "The architecture separates presentation (Three.js scene), interaction (XR input handling), and networking (WebSocket + WebRTC data channels). This allows graceful degradation — users on flat screens see the same world but with mouse/keyboard controls.",
            ]),
            key_decisions: notes(&[
                (
                    "WebXR Over Native",
                    "Choosing WebXR reduced deployment friction massively. No app store approval, instant updates, and users join via URL. Trade-off: slightly lower performance ceiling, but worth it for accessibility.",
                ),
                (
                    "Hybrid WebSocket + WebRTC",
                    "WebSocket handles signaling and state sync. WebRTC data channels handle high-frequency positional updates. This hybrid approach balances reliability with low latency.",
                ),
                (
                    "Client-Side Prediction",
                    "Movements feel instant locally, reconciled with server state on the next tick. This makes 200ms+ latency tolerable while maintaining synchronized state.",
                ),
                (
                    "Minimal Asset Complexity",
                    "All 3D models are sub-50k polygons with baked lighting. Textures are compressed. This ensures smooth 72fps even on Quest 2 with 8 simultaneous users.",
                ),
            ]),
            asset_considerations: notes(&[
                (
                    "Mesh Optimization",
                    "All meshes processed through geometry compression. Shared geometries instanced. Dynamic objects use simplified collision meshes separate from visual meshes.",
                ),
                (
                    "Material Pipeline",
                    "Standard PBR materials with atlas-packed textures. Normal maps only on hero assets. All materials use the same shader variant to reduce state changes.",
                ),
                (
                    "Animation System",
                    "Hand tracking animations use blend shapes for finger poses. Avatar bodies use skeletal animation with IK for foot placement. Animations compressed using keyframe reduction.",
                ),
                (
                    "Performance Budget",
                    "Target: 72fps on Quest 2. Budget: 500k triangles total scene, 100 draw calls max, 2ms physics, 5ms networking per frame. Profiled continuously during development.",
                ),
            ]),
            outcomes: Some(Outcomes {
                what_worked: strings(&[
                    "WebXR deployment was friction-free — users joined sessions within seconds",
                    "Spatial audio created natural presence; users reported \"forgetting it was remote\"",
                    "Client-side prediction made interactions feel responsive despite network latency",
                    "Performance budget discipline paid off — stable 72fps with 8 users consistently",
                ]),
                what_improve: strings(&[
                    "State reconciliation logic became complex; would use existing framework next time",
                    "Initial load time was 8-12 seconds; progressive loading of assets would help",
                    "Hand tracking wasn't reliable on all devices; fallback controller UI needed refinement",
                    "Server scaling required custom load balancing; cloud-native solution would simplify ops",
                ]),
            }),
        }),
        ..Project::new(
            "webxr-collaboration",
            "WebXR Spatial Collaboration Platform",
            Category::WebXr,
            "Multi-user browser-based XR environment with real-time synchronization, spatial audio, and persistent world state.",
        )
    }
}

fn unity_training() -> Project {
    Project {
        tags: strings(&["Unity", "XR Toolkit", "C#", "ML Agents"]),
        links: links("unity-xr-training", "unity-training-demo"),
        case_study: Some(CaseStudy {
            problem_statement: Some(
                "Medical training requires hands-on practice but traditional methods are costly, dangerous, or limited in scale. Training institutions needed immersive simulations with real-time performance analytics, adaptive difficulty that scales to learner ability, and haptic feedback for procedural training."
                    .to_string(),
            ),
            system_overview: strings(&[
                "Built on Unity XR Toolkit with OpenXR backend for cross-platform VR device support. Uses ML Agents for intelligent scenario adaptation. Performance metrics tracked in real-time with ML-based difficulty scaling.",
                "Architecture combines procedural scenario generation, haptic feedback systems via device-specific APIs, and a cloud backend for analytics. Supports both standalone headsets and PC-based VR.",
            ]),
            key_decisions: notes(&[
                (
                    "ML-Driven Difficulty Adaptation",
                    "Instead of static difficulty levels, the system uses ML Agents to analyze learner performance in real-time and dynamically adjust scenario complexity, ensuring optimal challenge.",
                ),
                (
                    "Haptic Feedback Integration",
                    "Critical for procedural training. Integrated with multiple haptic systems (controller haptics, body suits) to provide realistic tactile feedback during simulated procedures.",
                ),
                (
                    "Distributed Analytics",
                    "Performance data streamed to cloud backend for institutional dashboards. Enables instructors to monitor learner progress across cohorts without latency.",
                ),
            ]),
            asset_considerations: notes(&[
                (
                    "Medical Model Accuracy",
                    "High-poly anatomical models with PBR materials. Uses LOD systems to maintain 90fps on medical workstations while preserving surgical detail.",
                ),
                (
                    "Procedural Animation",
                    "Realistic physics-based deformation for soft tissue simulation. IK rigs for procedural hand animation following learner hand tracking.",
                ),
            ]),
            outcomes: Some(Outcomes {
                what_worked: strings(&[
                    "Institutions reported 40% faster learner progression compared to traditional methods",
                    "Haptic feedback significantly improved procedural muscle memory retention",
                    "ML adaptation kept learners in optimal challenge zone (flow state)",
                    "Cloud analytics enabled data-driven curriculum improvements",
                ]),
                what_improve: strings(&[
                    "Initial model creation pipeline was labor-intensive; need better medical asset workflows",
                    "Haptic device compatibility matrix grew complex; would standardize earlier",
                    "Network latency affected real-time analytics; edge computing would help",
                ]),
            }),
        }),
        ..Project::new(
            "unity-training",
            "Unity XR Training Simulation",
            Category::UnityXr,
            "Immersive medical training platform with haptic feedback, performance analytics, and adaptive difficulty systems.",
        )
    }
}

fn procedural_generator() -> Project {
    Project {
        tags: strings(&["Unity", "Compute Shaders", "Procedural", "Performance"]),
        links: links("procedural-generator", "procedural-demo"),
        case_study: Some(CaseStudy {
            problem_statement: Some(
                "Mobile XR applications are severely memory-constrained. Pre-authored environments consume gigabytes, making deployment impractical. Needed a solution to generate diverse, complex environments at runtime using minimal asset storage while maintaining 72fps on Quest-class hardware."
                    .to_string(),
            ),
            system_overview: strings(&[
                "Uses GPU compute shaders for terrain generation (Perlin noise, erosion simulation) and procedural vegetation placement. Asset templates are sparse and instanced across the scene.",
                "Multi-level LOD system: high-detail near camera, medium detail mid-range, impostor billboards far away. Streaming system unloads distant regions to manage memory.",
            ]),
            key_decisions: notes(&[
                (
                    "GPU-Driven Generation",
                    "Offload generation to compute shaders rather than CPU. Frees main thread for physics/gameplay while leveraging GPU parallelism.",
                ),
                (
                    "Instancing Over Duplication",
                    "Reuse mesh/material combinations via instancing. Dramatically reduces draw calls and memory footprint.",
                ),
                (
                    "Streaming Architecture",
                    "Load regions ahead of player movement. Unload far regions. Enables seamless traversal of infinite worlds on 2GB devices.",
                ),
            ]),
            asset_considerations: notes(&[
                (
                    "Sparse Asset Library",
                    "Only store a few base meshes and material templates. Everything else procedurally combined and parameterized.",
                ),
                (
                    "LOD Strategy",
                    "Near: 50k tris/object, Mid: 10k tris, Far: impostor billboard. Aggressive culling outside frustum.",
                ),
            ]),
            outcomes: Some(Outcomes {
                what_worked: strings(&[
                    "Generated worlds with <500MB disk footprint vs 5GB traditional approach",
                    "Maintained stable 72fps even with thousands of visible objects",
                    "Procedural variation prevented visual repetition in large explorations",
                    "Easy to extend with new biome templates",
                ]),
                what_improve: strings(&[
                    "Terrain erosion simulation was slow; would pre-compute or cache more aggressively",
                    "Memory spikes during streaming transitions; tighter memory budgeting needed",
                    "Plant distribution looked unnatural initially; needed better sampling heuristics",
                ]),
            }),
        }),
        ..Project::new(
            "procedural-generator",
            "Procedural Environment Generator",
            Category::UnityXr,
            "Runtime terrain and asset generation with LOD management, optimized for mobile XR devices at 72fps.",
        )
    }
}
