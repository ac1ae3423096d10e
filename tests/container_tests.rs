//! Scene Container Tests
//!
//! Tests for:
//! - SceneContainer: construction, collection insertion order, duplicates
//! - Environment texture: absent by default, set/get identity
//! - get_nodes: fixed category order, bone flattening, snapshot semantics

use std::sync::Arc;

use glam::Vec3;

use kestrel_scene::animation::{Animation, AnimationGroup};
use kestrel_scene::resources::{
    Geometry, Material, Mesh, MorphTargetManager, MultiMaterial, PostProcess, RenderTarget, Texture,
};
use kestrel_scene::scene::{Node, SceneContainer};
use kestrel_scene::{ActionManager, Bone, Camera, Light, ParticleSystem, Skeleton, TransformNode};

fn populated_container() -> (SceneContainer, Vec<Node>) {
    let mut container = SceneContainer::new();

    let m1 = Arc::new(Mesh::new("m1"));
    let l1 = Arc::new(Light::new_point("l1", Vec3::ONE, 1.0, 10.0));
    let c1 = Arc::new(Camera::new("c1"));
    let t1 = Arc::new(TransformNode::new("t1"));
    let b1 = Arc::new(Bone::new("b1"));
    let b2 = Arc::new(Bone::new("b2"));
    let s1 = Arc::new(Skeleton::new("s1", vec![Arc::clone(&b1), Arc::clone(&b2)]));

    container.meshes.push(Arc::clone(&m1));
    container.lights.push(Arc::clone(&l1));
    container.cameras.push(Arc::clone(&c1));
    container.transform_nodes.push(Arc::clone(&t1));
    container.skeletons.push(s1);

    let expected = vec![
        Node::Mesh(m1),
        Node::Light(l1),
        Node::Camera(c1),
        Node::TransformNode(t1),
        Node::Bone(b1),
        Node::Bone(b2),
    ];
    (container, expected)
}

// ============================================================================
// Construction & Collections
// ============================================================================

#[test]
fn container_starts_empty() {
    let container = SceneContainer::new();
    assert!(container.meshes.is_empty());
    assert!(container.skeletons.is_empty());
    assert!(container.pre_pass_render_targets.is_empty());
    assert!(container.environment_texture().is_none());
    assert!(container.get_nodes().is_empty());
}

#[test]
fn container_collections_preserve_insertion_order() {
    let mut container = SceneContainer::new();
    for name in ["a", "b", "c"] {
        container.materials.push(Arc::new(Material::new(name)));
    }

    let order: Vec<_> = container.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn container_allows_duplicate_references() {
    let mut container = SceneContainer::new();
    let mesh = Arc::new(Mesh::new("dup"));
    container.meshes.push(Arc::clone(&mesh));
    container.meshes.push(Arc::clone(&mesh));

    assert_eq!(container.meshes.len(), 2);
    assert!(Arc::ptr_eq(&container.meshes[0], &container.meshes[1]));
}

// ============================================================================
// Environment Texture
// ============================================================================

#[test]
fn environment_texture_absent_by_default() {
    let container = SceneContainer::new();
    assert!(container.environment_texture().is_none());
}

#[test]
fn environment_texture_set_then_get_returns_same_reference() {
    let mut container = SceneContainer::new();
    let env = Arc::new(Texture::from_url("env", "textures/env.hdr"));

    container.set_environment_texture(Some(Arc::clone(&env)));
    let stored = container.environment_texture().expect("texture should be set");
    assert!(Arc::ptr_eq(stored, &env));

    container.set_environment_texture(None);
    assert!(container.environment_texture().is_none());
}

// ============================================================================
// get_nodes: Order & Exclusions
// ============================================================================

#[test]
fn get_nodes_returns_fixed_category_order() {
    let (container, expected) = populated_container();

    let nodes = container.get_nodes();
    assert_eq!(nodes.len(), expected.len());
    for (i, (got, want)) in nodes.iter().zip(expected.iter()).enumerate() {
        assert!(
            got.ptr_eq(want),
            "Node {} should be '{}', got '{}'",
            i,
            want.name(),
            got.name()
        );
    }
}

#[test]
fn get_nodes_flattens_bones_in_skeleton_order() {
    let mut container = SceneContainer::new();
    let b1 = Arc::new(Bone::new("s1-b1"));
    let b2 = Arc::new(Bone::new("s1-b2"));
    let b3 = Arc::new(Bone::new("s2-b1"));
    container
        .skeletons
        .push(Arc::new(Skeleton::new("s1", vec![b1, b2])));
    container
        .skeletons
        .push(Arc::new(Skeleton::new("s2", vec![b3])));

    let names: Vec<_> = container.get_nodes().iter().map(|n| n.name().to_string()).collect();
    assert_eq!(names, vec!["s1-b1", "s1-b2", "s2-b1"]);
}

#[test]
fn get_nodes_excludes_non_spatial_categories() {
    let (mut container, expected) = populated_container();

    container.root_nodes.push(Node::Mesh(Arc::new(Mesh::new("root"))));
    container
        .particle_systems
        .push(Arc::new(ParticleSystem::new("ps", 256)));
    container
        .animations
        .push(Arc::new(Animation::new("walk", "position.x", 30.0)));
    container
        .animation_groups
        .push(Arc::new(AnimationGroup::new("group", Vec::new())));
    container
        .multi_materials
        .push(Arc::new(MultiMaterial::new("multi", Vec::new())));
    container.materials.push(Arc::new(Material::new("mat")));
    container
        .morph_target_managers
        .push(Arc::new(MorphTargetManager::new(4)));
    container.geometries.push(Arc::new(Geometry::new("geo", 36)));
    container.action_managers.push(Arc::new(ActionManager::new()));
    container.textures.push(Arc::new(Texture::new("tex")));
    container
        .post_processes
        .push(Arc::new(PostProcess::new("bloom")));
    container
        .pre_pass_render_targets
        .push(Arc::new(RenderTarget::new("prepass", 1024, 1024)));

    assert_eq!(
        container.get_nodes().len(),
        expected.len(),
        "Only meshes, lights, cameras, transform nodes and bones are nodes"
    );
}

#[test]
fn get_nodes_does_not_deduplicate() {
    let mut container = SceneContainer::new();
    let mesh = Arc::new(Mesh::new("twice"));
    container.meshes.push(Arc::clone(&mesh));
    container.meshes.push(Arc::clone(&mesh));

    assert_eq!(container.get_nodes().len(), 2);
}

// ============================================================================
// get_nodes: Snapshot Semantics
// ============================================================================

#[test]
fn get_nodes_returns_fresh_snapshot_each_call() {
    let (container, _) = populated_container();

    let mut first = container.get_nodes();
    let second = container.get_nodes();
    assert_eq!(first.len(), second.len());

    // Mutating one snapshot affects neither the other nor the container.
    first.clear();
    assert_eq!(second.len(), 6);
    assert_eq!(container.get_nodes().len(), 6);
    assert_eq!(container.meshes.len(), 1);
}

#[test]
fn get_nodes_reflects_later_container_mutation() {
    let mut container = SceneContainer::new();
    assert!(container.get_nodes().is_empty());

    container.meshes.push(Arc::new(Mesh::new("late")));
    assert_eq!(container.get_nodes().len(), 1);
}
