use std::path::Path;

use obj_scene::resources::{
    load_string,
    mesh::{FLOATS_PER_VERTEX, flatten, parse_obj},
};

const CUBE: &str = include_str!("fixtures/cube.obj");

async fn flattened(source: &str) -> Vec<f32> {
    let models = parse_obj(source, "inline").await.expect("valid OBJ");
    flatten(&models).expect("indices in range")
}

fn vertex(vertices: &[f32], n: usize) -> &[f32] {
    &vertices[n * FLOATS_PER_VERTEX..(n + 1) * FLOATS_PER_VERTEX]
}

#[tokio::test]
async fn should_expand_cube_to_180_floats() {
    let vertices = flattened(CUBE).await;
    assert_eq!(vertices.len(), 12 * 3 * 5);
}

#[tokio::test]
async fn should_emit_five_floats_per_face_vertex() {
    let models = parse_obj(CUBE, "cube").await.unwrap();
    let references: usize = models.iter().map(|m| m.mesh.indices.len()).sum();
    let vertices = flatten(&models).unwrap();
    assert_eq!(vertices.len(), FLOATS_PER_VERTEX * references);
}

#[tokio::test]
async fn should_duplicate_shared_vertices() {
    let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1 2/2 3/3
f 1/1 3/3 4/4
";
    let vertices = flattened(source).await;
    assert_eq!(vertices.len(), 6 * FLOATS_PER_VERTEX);
    // first and fourth vertex are the same corner, emitted twice
    assert_eq!(vertex(&vertices, 0), vertex(&vertices, 3));
    assert_eq!(vertex(&vertices, 2), vertex(&vertices, 4));
    assert_eq!(vertex(&vertices, 1), &[1.0, 0.0, 0.0, 1.0, 1.0]);
}

#[tokio::test]
async fn should_flip_v_of_present_texture_coordinates() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.25 0.75
vt 0.5 0.0
vt 1.0 1.0
f 1/1 2/2 3/3
";
    let vertices = flattened(source).await;
    assert_eq!(vertex(&vertices, 0), &[0.0, 0.0, 0.0, 0.25, 0.25]);
    assert_eq!(vertex(&vertices, 1), &[1.0, 0.0, 0.0, 0.5, 1.0]);
    assert_eq!(vertex(&vertices, 2), &[0.0, 1.0, 0.0, 1.0, 0.0]);
}

#[tokio::test]
async fn should_default_missing_uv_to_zero_and_keep_stride() {
    let source = "\
v 1 2 3
v 4 5 6
v 7 8 9
f 1 2 3
";
    let vertices = flattened(source).await;
    assert_eq!(
        vertices,
        vec![
            1.0, 2.0, 3.0, 0.0, 0.0, //
            4.0, 5.0, 6.0, 0.0, 0.0, //
            7.0, 8.0, 9.0, 0.0, 0.0,
        ]
    );
}

const MIXED_UV_FACES: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 5 5 5
v 6 5 5
v 5 6 5
vt 0 0
vt 1 0
vt 0 1
o mixed
f 1 2 3
f 4/1 5/2 6/3
";

#[tokio::test]
async fn should_reject_a_model_with_uv_on_only_some_faces() {
    let models = parse_obj(MIXED_UV_FACES, "inline").await.expect("valid OBJ");
    let error = flatten(&models).expect_err("partial uv cannot be matched to vertices");
    assert!(error.to_string().contains("mixed"), "{error}");
}

#[tokio::test]
async fn should_keep_uv_with_its_own_model() {
    let source = MIXED_UV_FACES.replace("f 4/1", "o textured\nf 4/1");
    let vertices = flattened(&source).await;
    assert_eq!(
        vertices,
        vec![
            0.0, 0.0, 0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            5.0, 5.0, 5.0, 0.0, 1.0, //
            6.0, 5.0, 5.0, 1.0, 1.0, //
            5.0, 6.0, 5.0, 0.0, 0.0,
        ]
    );
}

#[tokio::test]
async fn should_triangulate_quads() {
    let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
    let vertices = flattened(source).await;
    assert_eq!(vertices.len(), 2 * 3 * FLOATS_PER_VERTEX);
}

#[tokio::test]
async fn should_keep_objects_in_file_order() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 5 5 5
v 6 5 5
v 5 6 5
o first
f 1 2 3
o second
f 4 5 6
";
    let models = parse_obj(source, "two objects").await.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "first");
    assert_eq!(models[1].name, "second");

    let vertices = flatten(&models).unwrap();
    assert_eq!(vertices.len(), 6 * FLOATS_PER_VERTEX);
    assert_eq!(&vertex(&vertices, 0)[..3], &[0.0, 0.0, 0.0]);
    assert_eq!(&vertex(&vertices, 3)[..3], &[5.0, 5.0, 5.0]);
}

#[tokio::test]
async fn should_ignore_points_and_lines() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
p 1
l 1 2
f 1 2 3
";
    let vertices = flattened(source).await;
    assert_eq!(vertices.len(), 3 * FLOATS_PER_VERTEX);
}

#[tokio::test]
async fn should_produce_nothing_for_a_model_without_faces() {
    let vertices = flattened("v 0 0 0\nv 1 0 0\n").await;
    assert!(vertices.is_empty());
}

#[tokio::test]
async fn should_reject_malformed_positions() {
    let result = parse_obj("v 0 zero 0\nf 1 1 1\n", "broken").await;
    let error = result.expect_err("malformed position must not parse");
    assert!(format!("{error:#}").contains("broken"));
}

#[tokio::test]
async fn should_name_the_missing_file() {
    let error = load_string(Path::new("does/not/exist.obj"))
        .await
        .expect_err("file does not exist");
    assert!(error.to_string().contains("does/not/exist.obj"));
}
